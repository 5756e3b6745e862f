//! Record value types for Goldbach pair enumeration.
//!
//! ## Purpose
//!
//! This module defines the two record types that flow through the
//! pipeline: the bare prime pair produced by enumeration, and the
//! enriched record carrying the derived visualization coordinates.
//!
//! ## Design notes
//!
//! * **Immutable**: Records are plain `Copy` value objects; nothing
//!   mutates them after creation.
//! * **Generics**: Generic over unsigned primitive integers, mirroring
//!   the rest of the crate.
//! * **Ranks are 1-based**: `index1 = 1` means `prime1` is the first
//!   (smallest) sieved prime.
//!
//! ## Invariants
//!
//! * `prime1 <= prime2` (enforced by enumeration order, not a post-filter).
//! * `sum == prime1 + prime2` and `sum` is even.
//! * `duplicate_count >= 1`: every record counts itself.
//!
//! ## Non-goals
//!
//! * This module does not construct records; enumeration and enrichment do.
//! * This module does not validate the invariants above.

// ============================================================================
// Pair Record
// ============================================================================

/// A unique prime pair and its even sum, the atomic output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PairRecord<T> {
    /// The smaller-or-equal prime operand.
    pub prime1: T,

    /// The larger-or-equal prime operand.
    pub prime2: T,

    /// `prime1 + prime2`, always even.
    pub sum: T,
}

// ============================================================================
// Enriched Record
// ============================================================================

/// A pair record extended with rank and duplicate-count coordinates.
///
/// Derived in one pass after the full pair set is known; the duplicate
/// count needs a complete per-sum tally first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnrichedRecord<T> {
    /// The smaller-or-equal prime operand.
    pub prime1: T,

    /// The larger-or-equal prime operand.
    pub prime2: T,

    /// `prime1 + prime2`, always even.
    pub sum: T,

    /// 1-based rank of `prime1` in the sieved prime list.
    pub index1: usize,

    /// 1-based rank of `prime2` in the sieved prime list.
    pub index2: usize,

    /// Number of pair records sharing this record's sum, itself included.
    pub duplicate_count: usize,
}

impl<T: Copy> EnrichedRecord<T> {
    /// The bare pair this record was derived from.
    pub fn pair(&self) -> PairRecord<T> {
        PairRecord {
            prime1: self.prime1,
            prime2: self.prime2,
            sum: self.sum,
        }
    }
}
