//! Prime generation via the Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! This module produces the ordered list of primes up to a caller-supplied
//! limit. It is the sole source of primes for the enumeration layer.
//!
//! ## Design notes
//!
//! * **Classic sieve**: Boolean mark array of size `limit + 1`, indices 0
//!   and 1 pre-marked composite, multiples marked from `num * num` upward.
//! * **Generics**: Generic over unsigned primitive integers; sieving runs
//!   on `usize` indices and converts back on collection.
//! * **Total**: A degenerate limit yields an empty list, never an error.
//!   Feasibility of the allocation is the engine validator's concern and
//!   is checked before this function is reached.
//!
//! ## Key concepts
//!
//! * **Mark array**: `is_prime[n]` stays `true` iff `n` has no divisor in
//!   `[2, sqrt(n)]`.
//! * **Square start**: Marking multiples from `num * num` skips composites
//!   already marked by smaller factors.
//!
//! ## Invariants
//!
//! * Output is strictly increasing and contains every prime `<= limit`
//!   exactly once.
//! * O(limit * log log limit) time, O(limit) space.
//!
//! ## Non-goals
//!
//! * This module does not validate resource feasibility (handled by `validator`).
//! * This module does not test primality of individual numbers on demand.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{PrimInt, Unsigned};

// ============================================================================
// Sieve of Eratosthenes
// ============================================================================

/// Collect all primes `<= limit` in ascending order.
///
/// Returns an empty list (not an error) when `limit < 2` or when the
/// limit does not fit in a `usize` index space.
pub fn sieve_of_eratosthenes<T: PrimInt + Unsigned>(limit: T) -> Vec<T> {
    let limit = match limit.to_usize() {
        Some(limit) => limit,
        None => return Vec::new(),
    };
    if limit < 2 {
        return Vec::new();
    }

    // 0 and 1 are not primes.
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut num = 2;
    while num * num <= limit {
        if is_prime[num] {
            let mut multiple = num * num;
            while multiple <= limit {
                is_prime[multiple] = false;
                multiple += num;
            }
        }
        num += 1;
    }

    // Every surviving index fits back into T because `limit` came from T.
    (2..=limit)
        .filter(|&n| is_prime[n])
        .filter_map(T::from)
        .collect()
}
