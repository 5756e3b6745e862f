#![cfg(feature = "dev")]
//! Tests for rank and duplicate-count enrichment.
//!
//! These tests verify the coordinate enricher:
//! - 1-based ranks match positions in the prime list
//! - Duplicate counts tally all pairs sharing a sum
//! - Length/order preservation and the consistency assertion
//!
//! ## Test Organization
//!
//! 1. **Ranks** - index1/index2 correctness
//! 2. **Duplicate Counts** - Per-sum tallies and reconstruction
//! 3. **Shape** - Same length and order as input
//! 4. **Consistency** - Unknown primes fail loudly

use std::collections::BTreeSet;

use goldbach::internals::algorithms::enrichment::enrich;
use goldbach::internals::algorithms::enumeration::enumerate_pairs;
use goldbach::internals::math::sieve::sieve_of_eratosthenes;
use goldbach::prelude::{EnrichedRecord, GoldbachError, PairRecord};

// ============================================================================
// Helper Functions
// ============================================================================

fn enriched_fixture(limit: u64) -> (Vec<u64>, Vec<EnrichedRecord<u64>>) {
    let primes = sieve_of_eratosthenes(limit);
    let pairs = enumerate_pairs(&primes, None);
    let records = enrich(&pairs, &primes).expect("consistent pipeline");
    (primes, records)
}

// ============================================================================
// Rank Tests
// ============================================================================

/// Test ranks are the 1-based positions in the prime list.
///
/// Verifies primes[index - 1] recovers each operand.
#[test]
fn test_enrich_ranks_are_one_based() {
    let (primes, records) = enriched_fixture(60);

    for record in &records {
        assert_eq!(primes[record.index1 - 1], record.prime1);
        assert_eq!(primes[record.index2 - 1], record.prime2);
    }
}

/// Test the golden ranks for primes [2, 3, 5, 7].
///
/// Verifies (3, 7, 10) carries ranks (2, 4).
#[test]
fn test_enrich_golden_ranks() {
    let (_, records) = enriched_fixture(7);

    let target = records
        .iter()
        .find(|r| r.prime1 == 3 && r.prime2 == 7)
        .expect("(3, 7) is in the golden set");

    assert_eq!(target.index1, 2, "3 is the 2nd prime");
    assert_eq!(target.index2, 4, "7 is the 4th prime");
}

// ============================================================================
// Duplicate Count Tests
// ============================================================================

/// Test every record sharing a sum carries the same count.
///
/// Verifies the count equals the group's total record tally.
#[test]
fn test_enrich_duplicate_counts_match_group_sizes() {
    let (_, records) = enriched_fixture(60);

    for record in &records {
        let group_size = records.iter().filter(|r| r.sum == record.sum).count();
        assert_eq!(
            record.duplicate_count, group_size,
            "sum {} tallied wrong",
            record.sum
        );
    }
}

/// Test duplicate counts reconstruct the total record count.
///
/// Verifies summing one representative per distinct sum equals len.
#[test]
fn test_enrich_duplicate_counts_reconstruct_total() {
    let (_, records) = enriched_fixture(100);

    let distinct_sums: BTreeSet<u64> = records.iter().map(|r| r.sum).collect();
    let reconstructed: usize = distinct_sums
        .iter()
        .map(|sum| {
            records
                .iter()
                .find(|r| r.sum == *sum)
                .expect("representative exists")
                .duplicate_count
        })
        .sum();

    assert_eq!(reconstructed, records.len());
}

/// Test the golden duplicate counts for primes [2, 3, 5, 7].
///
/// Verifies sum 10 (3+7 and 5+5) counts 2 and all other sums count 1.
#[test]
fn test_enrich_golden_duplicate_counts() {
    let (_, records) = enriched_fixture(7);

    for record in &records {
        let expected = if record.sum == 10 { 2 } else { 1 };
        assert_eq!(record.duplicate_count, expected, "sum {}", record.sum);
    }
}

// ============================================================================
// Shape Tests
// ============================================================================

/// Test enrichment preserves length and order.
///
/// Verifies each enriched record wraps the pair at the same position.
#[test]
fn test_enrich_preserves_length_and_order() {
    let primes = sieve_of_eratosthenes(80u64);
    let pairs = enumerate_pairs(&primes, None);
    let records = enrich(&pairs, &primes).expect("consistent pipeline");

    assert_eq!(records.len(), pairs.len());
    for (record, pair) in records.iter().zip(&pairs) {
        assert_eq!(record.pair(), *pair);
    }
}

/// Test enrichment of an empty pair list.
///
/// Verifies an empty input is not an error.
#[test]
fn test_enrich_empty_pairs() {
    let primes = sieve_of_eratosthenes(10u64);
    let records = enrich(&[], &primes).expect("empty input is fine");

    assert!(records.is_empty());
}

// ============================================================================
// Consistency Tests
// ============================================================================

/// Test a pair referencing an unknown prime fails loudly.
///
/// Verifies the error carries the offending value.
#[test]
fn test_enrich_unknown_prime_fails() {
    let primes = vec![2u64, 3, 5];
    let rogue = PairRecord {
        prime1: 11,
        prime2: 3,
        sum: 14,
    };

    let result = enrich(&[rogue], &primes);

    assert!(
        matches!(result, Err(GoldbachError::UnknownPrime(11))),
        "expected UnknownPrime(11), got {result:?}"
    );
}
