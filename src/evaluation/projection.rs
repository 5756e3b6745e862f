//! Axis enumeration and record projection.
//!
//! ## Purpose
//!
//! This module maps an enriched record's named fields onto rendering
//! axes. The six-field axis set is a closed enum, so an impossible axis
//! is unrepresentable once configuration has been parsed.
//!
//! ## Design notes
//!
//! * **Pure accessors**: `Axis::project` reads a field and widens it to
//!   `f64`; it has no knowledge of rendering.
//! * **Configuration-time rejection**: Free-form axis names are parsed
//!   through `FromStr`, which is where `UnknownAxis` is raised - before
//!   any computation runs.
//! * **Caller-side constant**: With 2 dimensions the third coordinate is
//!   projected as the constant 0 by [`AxisAssignment`], the caller-side
//!   mapping; `Axis` itself stays a six-field accessor.
//!
//! ## Key concepts
//!
//! * **Prime1 / Prime2 / Sum**: The raw pair fields.
//! * **Index1 / Index2**: 1-based ranks in the sieved prime list.
//! * **DuplicateCount**: Pairs sharing the record's sum.
//!
//! ## Invariants
//!
//! * Projection is total over the six variants (exhaustive match).
//! * Parsing is case-insensitive over the canonical field names.
//!
//! ## Non-goals
//!
//! * This module does not draw or lay out anything.
//! * This module does not decide which axes a front end offers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use num_traits::{PrimInt, ToPrimitive, Unsigned};

// Internal dependencies
use crate::primitives::errors::GoldbachError;
use crate::primitives::record::EnrichedRecord;

// ============================================================================
// Axis Enum
// ============================================================================

/// A projectable field of an enriched record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The smaller-or-equal prime operand.
    Prime1,

    /// The larger-or-equal prime operand.
    Prime2,

    /// The pair sum.
    Sum,

    /// 1-based rank of `prime1` in the prime list.
    Index1,

    /// 1-based rank of `prime2` in the prime list.
    Index2,

    /// Number of pairs sharing the record's sum.
    DuplicateCount,
}

impl Axis {
    /// All six projectable fields, in tabular column order.
    pub const ALL: [Axis; 6] = [
        Axis::Prime1,
        Axis::Prime2,
        Axis::Sum,
        Axis::Index1,
        Axis::Index2,
        Axis::DuplicateCount,
    ];

    /// Canonical field name, matching the tabular column captions.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Prime1 => "Prime1",
            Axis::Prime2 => "Prime2",
            Axis::Sum => "Sum",
            Axis::Index1 => "Index1",
            Axis::Index2 => "Index2",
            Axis::DuplicateCount => "DuplicateCount",
        }
    }

    /// Project a record's field onto this axis as an `f64` coordinate.
    pub fn project<T: PrimInt + Unsigned>(&self, record: &EnrichedRecord<T>) -> f64 {
        match self {
            Axis::Prime1 => record.prime1.to_f64().unwrap_or(f64::NAN),
            Axis::Prime2 => record.prime2.to_f64().unwrap_or(f64::NAN),
            Axis::Sum => record.sum.to_f64().unwrap_or(f64::NAN),
            Axis::Index1 => record.index1.to_f64().unwrap_or(f64::NAN),
            Axis::Index2 => record.index2.to_f64().unwrap_or(f64::NAN),
            Axis::DuplicateCount => record.duplicate_count.to_f64().unwrap_or(f64::NAN),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = GoldbachError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "prime1" => Ok(Axis::Prime1),
            "prime2" => Ok(Axis::Prime2),
            "sum" => Ok(Axis::Sum),
            "index1" => Ok(Axis::Index1),
            "index2" => Ok(Axis::Index2),
            "duplicatecount" => Ok(Axis::DuplicateCount),
            _ => Err(GoldbachError::UnknownAxis(name.to_string())),
        }
    }
}

// ============================================================================
// Axis Assignment
// ============================================================================

/// The caller-side mapping of record fields onto 2 or 3 rendering axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisAssignment {
    /// Field rendered on the X axis.
    pub x: Axis,

    /// Field rendered on the Y axis.
    pub y: Axis,

    /// Field rendered on the Z axis; `None` for 2-D output.
    pub z: Option<Axis>,
}

impl Default for AxisAssignment {
    /// The historical default: X = Prime1, Y = Sum, Z = Prime2.
    fn default() -> Self {
        Self {
            x: Axis::Prime1,
            y: Axis::Sum,
            z: Some(Axis::Prime2),
        }
    }
}

impl AxisAssignment {
    /// Number of live axes (2 or 3).
    pub fn dimensions(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    /// Project a record onto the assigned axes.
    ///
    /// With 2 dimensions the third coordinate is the constant 0, by
    /// caller convention.
    pub fn project<T: PrimInt + Unsigned>(&self, record: &EnrichedRecord<T>) -> [f64; 3] {
        [
            self.x.project(record),
            self.y.project(record),
            self.z.map_or(0.0, |axis| axis.project(record)),
        ]
    }
}
