//! Error types for Goldbach pipeline operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring
//! and running the pair-enumeration pipeline, including input validation,
//! resource limits, and axis configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending limit).
//! * **Pre-flight**: Every variant except `UnknownPrime` is raised during
//!   configuration, before any computation runs.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Degenerate limits, zero ceilings, missing configuration.
//! 2. **Resource limits**: Infeasible sieve allocations rejected before allocating.
//! 3. **Axis configuration**: Unknown axis names, dimension conflicts.
//! 4. **Internal consistency**: `UnknownPrime` flags a pipeline bug, never user error.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values are widened to `u64` so the enum stays non-generic.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Goldbach pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoldbachError {
    /// Neither a sieve limit nor a sum ceiling was configured.
    MissingLimit,

    /// Sieve limit is degenerate; no primes exist below 2.
    InvalidLimit {
        /// The limit provided.
        got: u64,
        /// Minimum usable limit.
        min: u64,
    },

    /// Requested limit implies an infeasible sieve allocation.
    ResourceLimit {
        /// The limit provided.
        got: u64,
        /// Maximum supported limit.
        max: u64,
    },

    /// Sum ceiling must be positive; the smallest even prime sum is 4.
    InvalidMaxSum {
        /// The ceiling provided.
        got: u64,
    },

    /// Projection dimensions must be 2 or 3.
    InvalidDimensions(usize),

    /// A z axis was assigned while 2 dimensions were requested.
    AxisConflict {
        /// The requested dimension count.
        dimensions: usize,
    },

    /// Axis name outside the fixed six-field enumeration.
    UnknownAxis(String),

    /// A pair referenced a prime absent from the sieved list (pipeline bug).
    UnknownPrime(u64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for GoldbachError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingLimit => {
                write!(f, "No sieve limit or sum ceiling configured")
            }
            Self::InvalidLimit { got, min } => {
                write!(f, "Invalid sieve limit: {got} (must be at least {min})")
            }
            Self::ResourceLimit { got, max } => {
                write!(
                    f,
                    "Sieve limit {got} exceeds the supported maximum {max}; \
                     the mark array would be infeasible to allocate"
                )
            }
            Self::InvalidMaxSum { got } => {
                write!(f, "Invalid sum ceiling: {got} (must be positive)")
            }
            Self::InvalidDimensions(dims) => {
                write!(f, "Invalid dimensions: {dims} (must be 2 or 3)")
            }
            Self::AxisConflict { dimensions } => {
                write!(
                    f,
                    "A z axis was assigned but only {dimensions} dimensions were requested"
                )
            }
            Self::UnknownAxis(name) => {
                write!(
                    f,
                    "Unknown axis '{name}' (expected one of: Prime1, Prime2, Sum, \
                     Index1, Index2, DuplicateCount)"
                )
            }
            Self::UnknownPrime(value) => {
                write!(
                    f,
                    "Internal consistency violation: {value} is not in the sieved prime list"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. \
                     Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for GoldbachError {}
