//! High-level API for Goldbach pair enumeration.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It
//! implements a fluent builder for configuring the pipeline (sieve
//! limit or sum ceiling, axis assignment, connection chaining) and a
//! model type that executes it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with the historical defaults
//!   (X = Prime1, Y = Sum, Z = Prime2, connections off).
//! * **Validated**: Everything is validated in `build()`, before any
//!   computation or allocation; `run()` cannot fail on configuration.
//! * **Type-Safe**: Generic over unsigned primitive integers; the axis
//!   set is a closed enum.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GoldbachBuilder`] via `Goldbach::new()`.
//! 2. Chain configuration methods (`.limit()`, `.max_sum()`, axes, ...).
//! 3. Call `.build()` to validate and obtain a [`GoldbachModel`].
//! 4. Call `.run()` to execute the pipeline.

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::engine::executor::{GoldbachExecutor, PipelineConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::GoldbachResult;
pub use crate::evaluation::projection::{Axis, AxisAssignment};
pub use crate::evaluation::table::PairTable;
pub use crate::primitives::errors::GoldbachError;

// ============================================================================
// Goldbach Builder
// ============================================================================

/// Fluent builder for configuring a pair-enumeration run.
#[derive(Debug, Clone)]
pub struct GoldbachBuilder<T> {
    /// Sieve limit (inclusive).
    pub limit: Option<T>,

    /// Ceiling on pair sums.
    pub max_sum: Option<T>,

    /// Projection dimension count (2 or 3).
    pub dimensions: Option<usize>,

    /// Field rendered on the X axis.
    pub x_axis: Option<Axis>,

    /// Field rendered on the Y axis.
    pub y_axis: Option<Axis>,

    /// Field rendered on the Z axis.
    pub z_axis: Option<Axis>,

    /// Whether to chain shared-sum records into connections.
    pub show_connections: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: PrimInt + Unsigned> Default for GoldbachBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Unsigned> GoldbachBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            limit: None,
            max_sum: None,
            dimensions: None,
            x_axis: None,
            y_axis: None,
            z_axis: None,
            show_connections: None,
            duplicate_param: None,
        }
    }

    /// Set the sieve limit (inclusive).
    pub fn limit(mut self, limit: T) -> Self {
        if self.limit.is_some() {
            self.duplicate_param = Some("limit");
        }
        self.limit = Some(limit);
        self
    }

    /// Set the ceiling on pair sums.
    ///
    /// When no sieve limit is set, the limit is derived as
    /// `max_sum - 2`: no larger prime can appear in a pair under the
    /// ceiling.
    pub fn max_sum(mut self, max_sum: T) -> Self {
        if self.max_sum.is_some() {
            self.duplicate_param = Some("max_sum");
        }
        self.max_sum = Some(max_sum);
        self
    }

    /// Set the projection dimension count (2 or 3).
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dimensions);
        self
    }

    /// Assign the field rendered on the X axis.
    pub fn x_axis(mut self, axis: Axis) -> Self {
        if self.x_axis.is_some() {
            self.duplicate_param = Some("x_axis");
        }
        self.x_axis = Some(axis);
        self
    }

    /// Assign the field rendered on the Y axis.
    pub fn y_axis(mut self, axis: Axis) -> Self {
        if self.y_axis.is_some() {
            self.duplicate_param = Some("y_axis");
        }
        self.y_axis = Some(axis);
        self
    }

    /// Assign the field rendered on the Z axis (implies 3 dimensions).
    pub fn z_axis(mut self, axis: Axis) -> Self {
        if self.z_axis.is_some() {
            self.duplicate_param = Some("z_axis");
        }
        self.z_axis = Some(axis);
        self
    }

    /// Chain records sharing a sum into connective segments.
    pub fn show_connections(mut self) -> Self {
        self.show_connections = Some(true);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<GoldbachModel<T>, GoldbachError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate the ceiling first; limit derivation depends on it.
        if let Some(max_sum) = self.max_sum {
            Validator::validate_max_sum(max_sum)?;
        }

        // Resolve the sieve limit: configured, or derived from the ceiling
        // (no prime above max_sum - 2 can appear in a pair under it).
        let limit = match (self.limit, self.max_sum) {
            (Some(limit), _) => limit,
            (None, Some(max_sum)) => max_sum.saturating_sub(T::one() + T::one()),
            (None, None) => return Err(GoldbachError::MissingLimit),
        };
        Validator::validate_limit(limit)?;

        // Validate dimensions and resolve the z axis
        if let Some(dimensions) = self.dimensions {
            Validator::validate_dimensions(dimensions)?;
            Validator::validate_axis_arity(dimensions, self.z_axis.is_some())?;
        }
        let z_axis = match (self.dimensions, self.z_axis) {
            (Some(2), _) => None,
            (_, Some(axis)) => Some(axis),
            (_, None) => Some(Axis::Prime2),
        };

        let axes = AxisAssignment {
            x: self.x_axis.unwrap_or(Axis::Prime1),
            y: self.y_axis.unwrap_or(Axis::Sum),
            z: z_axis,
        };

        Ok(GoldbachModel {
            config: PipelineConfig {
                limit,
                max_sum: self.max_sum,
                show_connections: self.show_connections.unwrap_or(false),
                axes,
            },
        })
    }
}

// ============================================================================
// Goldbach Model
// ============================================================================

/// A validated, ready-to-run pair-enumeration model.
pub struct GoldbachModel<T> {
    config: PipelineConfig<T>,
}

impl<T: PrimInt + Unsigned> GoldbachModel<T> {
    /// The resolved axis assignment this model will project with.
    pub fn axes(&self) -> AxisAssignment {
        self.config.axes
    }

    /// Execute the pipeline.
    pub fn run(self) -> Result<GoldbachResult<T>, GoldbachError> {
        GoldbachExecutor::run_with_config(self.config)
    }
}
