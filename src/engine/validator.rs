//! Input validation for pipeline configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for the pipeline's
//! configuration surface: sieve limit, sum ceiling, projection
//! dimensions, and axis assignment consistency.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Pre-allocation**: The resource check rejects an infeasible sieve
//!   before the mark array is allocated, not after an OOM.
//! * **Generics**: Limit checks are generic over unsigned primitive
//!   integers; values are widened to `u64` for error reporting.
//!
//! ## Key concepts
//!
//! * **Degenerate limit**: No primes exist below 2, so a configured limit
//!   under 2 is a caller error rather than an empty run.
//! * **Resource cap**: Sieve memory grows linearly with the limit, and the
//!   pair enumeration is quadratic in the prime count; the cap bounds what
//!   a caller can request interactively.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * Anything that passes validation can run without allocation failure
//!   or axis surprises.
//!
//! ## Non-goals
//!
//! * This module does not run the sieve or enumeration.
//! * This module does not correct invalid inputs.

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::primitives::errors::GoldbachError;

// ============================================================================
// Limits
// ============================================================================

/// Largest accepted sieve limit.
///
/// The mark array costs one byte per candidate, so this caps the sieve at
/// roughly 100 MB; the quadratic pair enumeration makes anything larger
/// unusable interactively long before memory runs out.
pub const MAX_SIEVE_LIMIT: u64 = 100_000_000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pipeline configuration.
///
/// Provides static methods returning `Result<(), GoldbachError>` that
/// fail fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Numeric Parameters
    // ========================================================================

    /// Validate the sieve limit: at least 2, and feasible to allocate.
    pub fn validate_limit<T: PrimInt + Unsigned>(limit: T) -> Result<(), GoldbachError> {
        let got = limit.to_u64().unwrap_or(u64::MAX);
        if got < 2 {
            return Err(GoldbachError::InvalidLimit { got, min: 2 });
        }
        if got > MAX_SIEVE_LIMIT || limit.to_usize().is_none() {
            return Err(GoldbachError::ResourceLimit {
                got,
                max: MAX_SIEVE_LIMIT,
            });
        }
        Ok(())
    }

    /// Validate the sum ceiling: positive.
    ///
    /// An odd or unreachably small ceiling is accepted; it merely shrinks
    /// the result, possibly to empty.
    pub fn validate_max_sum<T: PrimInt + Unsigned>(max_sum: T) -> Result<(), GoldbachError> {
        if max_sum.is_zero() {
            return Err(GoldbachError::InvalidMaxSum {
                got: max_sum.to_u64().unwrap_or(u64::MAX),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Projection Parameters
    // ========================================================================

    /// Validate the projection dimension count: 2 or 3.
    pub fn validate_dimensions(dimensions: usize) -> Result<(), GoldbachError> {
        if dimensions != 2 && dimensions != 3 {
            return Err(GoldbachError::InvalidDimensions(dimensions));
        }
        Ok(())
    }

    /// Validate that a z-axis assignment agrees with the dimension count.
    pub fn validate_axis_arity(
        dimensions: usize,
        has_z_axis: bool,
    ) -> Result<(), GoldbachError> {
        if dimensions == 2 && has_z_axis {
            return Err(GoldbachError::AxisConflict { dimensions });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Discipline
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), GoldbachError> {
        if let Some(parameter) = duplicate_param {
            return Err(GoldbachError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
