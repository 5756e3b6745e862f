//! Rank and duplicate-count enrichment.
//!
//! ## Purpose
//!
//! This module augments each pair record with the derived fields used for
//! richer visualization: the 1-based rank of each prime in the sieved
//! list, and the number of pairs sharing the record's sum.
//!
//! ## Design notes
//!
//! * **Two lookups, built once**: A prime-to-rank map and a count-per-sum
//!   tally are each built in a single pass and reused for every record.
//! * **Order-preserving**: Output has the same length and order as the
//!   input pair list.
//! * **Consistency assertion**: A pair referencing a prime absent from
//!   the list indicates an upstream bug and fails loudly with the
//!   offending value; it is never silently swallowed.
//!
//! ## Invariants
//!
//! * `index1`/`index2` match the 1-based position of the corresponding
//!   prime in the source list.
//! * Every record with the same sum carries the same `duplicate_count`,
//!   equal to the total number of pairs producing that sum.
//! * Summing `duplicate_count` over one representative per distinct sum
//!   reconstructs the total record count.
//!
//! ## Non-goals
//!
//! * This module does not group records (handled by `grouping`).
//! * This module does not filter or reorder records.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::primitives::errors::GoldbachError;
use crate::primitives::record::{EnrichedRecord, PairRecord};

// ============================================================================
// Enrichment
// ============================================================================

/// Attach rank and duplicate-count coordinates to every pair record.
///
/// Fails with [`GoldbachError::UnknownPrime`] if a pair references a
/// value absent from `primes`; given correct upstream construction this
/// cannot occur.
pub fn enrich<T: PrimInt + Unsigned>(
    pairs: &[PairRecord<T>],
    primes: &[T],
) -> Result<Vec<EnrichedRecord<T>>, GoldbachError> {
    // Pass 1a: prime value -> 1-based rank.
    let mut ranks: BTreeMap<T, usize> = BTreeMap::new();
    for (position, &prime) in primes.iter().enumerate() {
        ranks.insert(prime, position + 1);
    }

    // Pass 1b: sum value -> occurrence count across the whole result set.
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for pair in pairs {
        *counts.entry(pair.sum).or_insert(0) += 1;
    }

    // Pass 2: attach the derived fields, preserving length and order.
    pairs
        .iter()
        .map(|pair| {
            Ok(EnrichedRecord {
                prime1: pair.prime1,
                prime2: pair.prime2,
                sum: pair.sum,
                index1: rank_of(&ranks, pair.prime1)?,
                index2: rank_of(&ranks, pair.prime2)?,
                // The tally was built from these same pairs, so the key exists.
                duplicate_count: counts[&pair.sum],
            })
        })
        .collect()
}

/// Look up a prime's 1-based rank, surfacing the offending value on a miss.
fn rank_of<T: PrimInt + Unsigned>(
    ranks: &BTreeMap<T, usize>,
    prime: T,
) -> Result<usize, GoldbachError> {
    ranks
        .get(&prime)
        .copied()
        .ok_or_else(|| GoldbachError::UnknownPrime(prime.to_u64().unwrap_or(u64::MAX)))
}
