//! Execution engine for the pair pipeline.
//!
//! ## Purpose
//!
//! This module runs the validated configuration through the pipeline
//! stages in order: sieve the primes, enumerate the unique even-sum
//! pairs, enrich them with rank and duplicate-count coordinates, and
//! (optionally) chain shared-sum records into connections.
//!
//! ## Design notes
//!
//! * Each stage produces freshly-owned, immutable output; no aliasing
//!   between stages.
//! * The whole run is synchronous, single-threaded and CPU-bound with no
//!   IO; callers needing responsiveness bound `limit`/`max_sum` up front
//!   and run the computation off their event loop.
//! * There is no mid-computation cancellation hook; the run is a
//!   short-lived pure computation, not a service.
//!
//! ## Invariants
//!
//! * Configuration reaching this module has already been validated.
//! * Record order is enumeration order, end to end.
//! * Identical configurations produce identical results.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not format or persist output (handled by `output`
//!   and external collaborators).

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::algorithms::enrichment::enrich;
use crate::algorithms::enumeration::enumerate_pairs;
use crate::algorithms::grouping::SumGroups;
use crate::engine::output::GoldbachResult;
use crate::evaluation::projection::AxisAssignment;
use crate::math::sieve::sieve_of_eratosthenes;
use crate::primitives::errors::GoldbachError;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig<T> {
    /// Sieve limit (inclusive).
    pub limit: T,

    /// Optional ceiling on pair sums.
    pub max_sum: Option<T>,

    /// Whether to chain shared-sum records into connections.
    pub show_connections: bool,

    /// Field-to-axis mapping carried through to the result.
    pub axes: AxisAssignment,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified pipeline executor.
pub struct GoldbachExecutor;

impl GoldbachExecutor {
    /// Run the full pipeline for a resolved configuration.
    pub fn run_with_config<T: PrimInt + Unsigned>(
        config: PipelineConfig<T>,
    ) -> Result<GoldbachResult<T>, GoldbachError> {
        let primes = sieve_of_eratosthenes(config.limit);
        let pairs = enumerate_pairs(&primes, config.max_sum);
        let records = enrich(&pairs, &primes)?;

        let connections = if config.show_connections {
            Some(SumGroups::from_records(&records).connections())
        } else {
            None
        };

        Ok(GoldbachResult {
            primes,
            records,
            connections,
            axes: config.axes,
            limit_used: config.limit,
            max_sum: config.max_sum,
        })
    }
}
