//! Insertion-ordered grouping by shared sum.
//!
//! ## Purpose
//!
//! This module groups enriched records by their sum value so that records
//! sharing a sum can be chained into connective line segments. It is an
//! explicit ordered multimap: keys appear in first-appearance order, and
//! each group preserves the enumeration order of its members.
//!
//! ## Design notes
//!
//! * **Indices, not copies**: Groups hold indices into the caller's record
//!   slice; the records themselves are never duplicated.
//! * **Path, not clique**: `connections` links consecutive members of each
//!   group pairwise, producing a path graph per sum value rather than a
//!   complete graph. Groups of size 1 produce no links.
//! * **Ordered multimap**: A key-order vector over a `BTreeMap` replaces
//!   the ad-hoc has-key dictionary accumulation pattern with the same
//!   semantics.
//!
//! ## Invariants
//!
//! * Concatenating all groups' members reproduces the original record
//!   index set exactly once each.
//! * Within a group, member order equals enumeration order.
//!
//! ## Non-goals
//!
//! * This module does not render lines or store coordinates.
//! * This module does not sort groups by key; iteration follows insertion.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::btree_map::Entry;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::btree_map::Entry;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::primitives::record::EnrichedRecord;

// ============================================================================
// Sum Groups
// ============================================================================

/// An insertion-ordered multimap from sum value to record indices.
#[derive(Debug, Clone, Default)]
pub struct SumGroups<T> {
    /// Sum values in first-appearance order.
    order: Vec<T>,

    /// Members of each group, in enumeration order.
    members: BTreeMap<T, Vec<usize>>,
}

impl<T: PrimInt + Unsigned> SumGroups<T> {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            members: BTreeMap::new(),
        }
    }

    /// Group a record slice by sum, keyed to indices into that slice.
    pub fn from_records(records: &[EnrichedRecord<T>]) -> Self {
        let mut groups = Self::new();
        for (index, record) in records.iter().enumerate() {
            groups.insert(record.sum, index);
        }
        groups
    }

    /// Append a record index to its sum's group, creating the group on
    /// first appearance.
    pub fn insert(&mut self, sum: T, record_index: usize) {
        match self.members.entry(sum) {
            Entry::Vacant(entry) => {
                self.order.push(sum);
                entry.insert(vec![record_index]);
            }
            Entry::Occupied(mut entry) => entry.get_mut().push(record_index),
        }
    }

    /// Member indices for a sum, in enumeration order.
    pub fn get(&self, sum: &T) -> Option<&[usize]> {
        self.members.get(sum).map(Vec::as_slice)
    }

    /// Number of distinct sums.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no records were grouped.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate groups in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &[usize])> {
        self.order
            .iter()
            .map(move |sum| (*sum, self.members[sum].as_slice()))
    }

    /// Pairwise chain links within each shared-sum group.
    ///
    /// Each group of size `n > 1` contributes `n - 1` links joining
    /// consecutive members; singletons contribute none. This is a
    /// deliberate visual simplification, not a claim about deeper prime
    /// relationships.
    pub fn connections(&self) -> Vec<(usize, usize)> {
        let mut links = Vec::new();
        for (_, members) in self.iter() {
            for window in members.windows(2) {
                links.push((window[0], window[1]));
            }
        }
        links
    }
}
