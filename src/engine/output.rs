//! Output types and result structures for pipeline runs.
//!
//! ## Purpose
//!
//! This module defines the `GoldbachResult` struct which encapsulates
//! everything a run produces: the sieved primes, the enriched records,
//! the optional connective chain links, and the axis mapping used to
//! project records for a renderer.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Connections are `Option<Vec<_>>`, populated
//!   only when requested.
//! * **Ergonomics**: Implements `Display` for a human-readable preview
//!   (summary plus first/last rows).
//! * **Renderer handoff**: `points` and `segments` emit projected `f64`
//!   coordinates; `table` emits the fixed-column tabular contract.
//!
//! ## Key concepts
//!
//! * **Enumeration order**: Records keep nested-loop order end to end.
//! * **Connections**: Index pairs into `records`, one path chain per
//!   shared sum.
//!
//! ## Invariants
//!
//! * `connections` only references valid record indices.
//! * Projection length equals record count.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only packages results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::evaluation::projection::AxisAssignment;
use crate::evaluation::table::{PairTable, COLUMNS};
use crate::primitives::record::EnrichedRecord;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldbachResult<T> {
    /// Sieved primes, strictly increasing.
    pub primes: Vec<T>,

    /// Enriched pair records, in enumeration order.
    pub records: Vec<EnrichedRecord<T>>,

    /// Chain links between records sharing a sum; `None` unless requested.
    pub connections: Option<Vec<(usize, usize)>>,

    /// Field-to-axis mapping for the projection helpers.
    pub axes: AxisAssignment,

    /// Sieve limit the run used (configured or derived from the ceiling).
    pub limit_used: T,

    /// Sum ceiling the run used, if any.
    pub max_sum: Option<T>,
}

impl<T: PrimInt + Unsigned> GoldbachResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of pair records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the run produced no pairs.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if connective chains were computed.
    pub fn has_connections(&self) -> bool {
        self.connections.is_some()
    }

    // ========================================================================
    // Collaborator Handoffs
    // ========================================================================

    /// Scatter points: every record projected onto the configured axes.
    pub fn points(&self) -> Vec<[f64; 3]> {
        self.records
            .iter()
            .map(|record| self.axes.project(record))
            .collect()
    }

    /// Connective line segments as projected endpoint pairs.
    ///
    /// Empty when connections were not requested.
    pub fn segments(&self) -> Vec<([f64; 3], [f64; 3])> {
        let Some(connections) = &self.connections else {
            return Vec::new();
        };
        connections
            .iter()
            .map(|&(a, b)| {
                (
                    self.axes.project(&self.records[a]),
                    self.axes.project(&self.records[b]),
                )
            })
            .collect()
    }

    /// The fixed-column tabular contract over this run's records.
    pub fn table(&self) -> PairTable<T> {
        PairTable::from_records(&self.records)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: PrimInt + Unsigned + Display + Debug> Display for GoldbachResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Sieve limit: {}", self.limit_used)?;
        if let Some(ceiling) = self.max_sum {
            writeln!(f, "  Sum ceiling: {}", ceiling)?;
        }
        writeln!(f, "  Primes:      {}", self.primes.len())?;
        writeln!(f, "  Pairs:       {}", self.records.len())?;
        if let Some(connections) = &self.connections {
            writeln!(f, "  Connections: {}", connections.len())?;
        }
        writeln!(f)?;

        writeln!(f, "Pair Records:")?;
        writeln!(
            f,
            "{:>8} {:>8} {:>8} {:>8} {:>8} {:>15}",
            COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4], COLUMNS[5]
        )?;
        writeln!(f, "{:-<60}", "")?;

        // Show first 10 and last 10 rows if more than 20 records.
        let n = self.records.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            let record = &self.records[idx];
            writeln!(
                f,
                "{:>8} {:>8} {:>8} {:>8} {:>8} {:>15}",
                record.prime1,
                record.prime2,
                record.sum,
                record.index1,
                record.index2,
                record.duplicate_count
            )?;
        }

        Ok(())
    }
}
