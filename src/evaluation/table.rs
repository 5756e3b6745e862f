//! Fixed-column tabular contract.
//!
//! ## Purpose
//!
//! This module is the sole handoff shape to the persistence collaborator:
//! one row per enriched record, in enumeration order, under the fixed
//! column set `Prime1, Prime2, Sum, Index1, Index2, DuplicateCount`.
//!
//! ## Design notes
//!
//! * **In-memory only**: The contract is satisfiable from memory alone;
//!   writing the delimited text to disk is the collaborator's job.
//! * **Deterministic**: Identical inputs produce byte-identical delimited
//!   output; there is no randomness anywhere in the pipeline.
//!
//! ## Invariants
//!
//! * Column order matches [`Axis::ALL`].
//! * Row order matches enumeration order.
//!
//! ## Non-goals
//!
//! * This module does not perform file IO.
//! * This module does not quote or escape values (all cells are integers).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Write};
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::evaluation::projection::Axis;
use crate::primitives::record::EnrichedRecord;

// ============================================================================
// Pair Table
// ============================================================================

/// The six column captions, in order.
pub const COLUMNS: [&str; 6] = [
    "Prime1",
    "Prime2",
    "Sum",
    "Index1",
    "Index2",
    "DuplicateCount",
];

/// Tabular view over enriched records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable<T> {
    /// One row per pair record, in enumeration order.
    pub rows: Vec<EnrichedRecord<T>>,
}

impl<T: PrimInt + Unsigned> PairTable<T> {
    /// Build a table over a record slice.
    pub fn from_records(records: &[EnrichedRecord<T>]) -> Self {
        Self {
            rows: records.to_vec(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column captions, matching [`Axis::ALL`] order.
    pub fn headers(&self) -> [&'static str; 6] {
        COLUMNS
    }
}

impl<T: PrimInt + Unsigned + Display> PairTable<T> {
    /// Render the table as delimited text: a header line followed by one
    /// line per row, cells joined by `separator`.
    pub fn to_delimited(&self, separator: char) -> String {
        let mut out = String::new();

        for (i, column) in COLUMNS.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(column);
        }
        out.push('\n');

        for row in &self.rows {
            // Cell order is the Axis::ALL order; writing to a String
            // cannot fail.
            let _ = writeln!(
                out,
                "{p1}{s}{p2}{s}{sum}{s}{i1}{s}{i2}{s}{dup}",
                p1 = row.prime1,
                p2 = row.prime2,
                sum = row.sum,
                i1 = row.index1,
                i2 = row.index2,
                dup = row.duplicate_count,
                s = separator,
            );
        }

        out
    }

    /// Render one row's cells through the axis projector, in column order.
    pub fn projected_row(&self, index: usize) -> Option<[f64; 6]> {
        let record = self.rows.get(index)?;
        let mut cells = [0.0; 6];
        for (cell, axis) in cells.iter_mut().zip(Axis::ALL) {
            *cell = axis.project(record);
        }
        Some(cells)
    }
}
