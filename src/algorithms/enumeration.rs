//! Exhaustive unique-pair enumeration with even-sum filtering.
//!
//! ## Purpose
//!
//! This module generates every valid `(prime1, prime2)` pair and its sum
//! from an ordered prime list, under the canonical policy: unique pairs
//! only, even sums only, optional sum ceiling.
//!
//! ## Design notes
//!
//! * **Triangular loop**: The inner index starts at the outer index, which
//!   is what guarantees `prime1 <= prime2` and deduplicates symmetric
//!   pairs. A symmetric `j`-from-0 loop is a superseded design and must
//!   not be reintroduced.
//! * **Ascending sums**: For a fixed outer index the sums grow with the
//!   inner index, so the inner loop terminates early once the ceiling is
//!   passed; output is identical to filtering after the fact.
//! * **Stable order**: Nested-loop order (outer ascending, inner
//!   ascending) is load-bearing: grouping chains consecutive records
//!   within a shared-sum group by this order.
//!
//! ## Invariants
//!
//! * Every record satisfies `prime1 <= prime2`, even `sum`, and
//!   `sum <= max_sum` when a ceiling is set.
//! * Empty input or an unreachable ceiling yields empty output, no error.
//!
//! ## Non-goals
//!
//! * This module does not verify that the input values are prime.
//! * This module does not compute derived coordinates (handled by `enrichment`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::primitives::record::PairRecord;

// ============================================================================
// Pair Enumeration
// ============================================================================

/// Enumerate all unique even-sum prime pairs in nested-loop order.
///
/// The input is assumed ascending (the sieve's output order). With a
/// ceiling set, pairs whose sum exceeds it are skipped; without one,
/// every even-sum pair is kept.
pub fn enumerate_pairs<T: PrimInt + Unsigned>(
    primes: &[T],
    max_sum: Option<T>,
) -> Vec<PairRecord<T>> {
    let mut pairs = Vec::new();

    for i in 0..primes.len() {
        let prime1 = primes[i];
        // j starts at i: prime1 <= prime2, no symmetric duplicates.
        for j in i..primes.len() {
            let prime2 = primes[j];

            // Sums ascend with j, so an overflowing sum ends the row.
            let sum = match prime1.checked_add(&prime2) {
                Some(sum) => sum,
                None => break,
            };
            if let Some(ceiling) = max_sum {
                if sum > ceiling {
                    break;
                }
            }

            // Odd sums (one operand is 2, the other odd) are excluded.
            if (sum & T::one()) != T::zero() {
                continue;
            }

            pairs.push(PairRecord {
                prime1,
                prime2,
                sum,
            });
        }
    }

    pairs
}
