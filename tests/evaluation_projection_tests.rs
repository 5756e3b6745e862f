#![cfg(feature = "dev")]
//! Tests for axis projection.
//!
//! These tests verify the six-field axis enumeration and the caller-side
//! axis assignment:
//! - Per-field projection values
//! - Name parsing and configuration-time rejection
//! - 2-D / 3-D assignment behavior and the constant-zero convention
//!
//! ## Test Organization
//!
//! 1. **Field Projection** - Each axis reads its field
//! 2. **Names and Parsing** - Round-trips, case folding, rejection
//! 3. **Axis Assignment** - Dimensions, defaults, constant z

use approx::assert_relative_eq;

use goldbach::prelude::{
    Axis, AxisAssignment, DuplicateCount, EnrichedRecord, GoldbachError, Index1, Index2, Prime1,
    Prime2, Sum,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_record() -> EnrichedRecord<u64> {
    EnrichedRecord {
        prime1: 3,
        prime2: 7,
        sum: 10,
        index1: 2,
        index2: 4,
        duplicate_count: 2,
    }
}

// ============================================================================
// Field Projection Tests
// ============================================================================

/// Test each axis projects its own field.
///
/// Verifies all six accessors against a known record.
#[test]
fn test_axis_projects_each_field() {
    let record = sample_record();

    assert_relative_eq!(Prime1.project(&record), 3.0);
    assert_relative_eq!(Prime2.project(&record), 7.0);
    assert_relative_eq!(Sum.project(&record), 10.0);
    assert_relative_eq!(Index1.project(&record), 2.0);
    assert_relative_eq!(Index2.project(&record), 4.0);
    assert_relative_eq!(DuplicateCount.project(&record), 2.0);
}

/// Test projection is exhaustive over the enumeration.
///
/// Verifies Axis::ALL covers six distinct fields.
#[test]
fn test_axis_all_is_exhaustive() {
    let record = sample_record();
    let values: Vec<f64> = Axis::ALL.iter().map(|axis| axis.project(&record)).collect();

    assert_eq!(values, vec![3.0, 7.0, 10.0, 2.0, 4.0, 2.0]);
}

// ============================================================================
// Name and Parsing Tests
// ============================================================================

/// Test canonical names round-trip through parsing.
///
/// Verifies name() output parses back to the same variant.
#[test]
fn test_axis_name_round_trip() {
    for axis in Axis::ALL {
        let parsed: Axis = axis.name().parse().expect("canonical name parses");
        assert_eq!(parsed, axis);
    }
}

/// Test parsing is case-insensitive.
///
/// Verifies lower/upper case spellings are accepted.
#[test]
fn test_axis_parse_case_insensitive() {
    assert_eq!("prime1".parse::<Axis>().unwrap(), Axis::Prime1);
    assert_eq!("SUM".parse::<Axis>().unwrap(), Axis::Sum);
    assert_eq!("duplicatecount".parse::<Axis>().unwrap(), Axis::DuplicateCount);
}

/// Test unknown axis names are rejected at configuration time.
///
/// Verifies the error carries the offending name.
#[test]
fn test_axis_parse_rejects_unknown() {
    let result = "velocity".parse::<Axis>();

    assert!(
        matches!(result, Err(GoldbachError::UnknownAxis(ref name)) if name == "velocity"),
        "expected UnknownAxis, got {result:?}"
    );
}

// ============================================================================
// Axis Assignment Tests
// ============================================================================

/// Test the default assignment matches the historical layout.
///
/// Verifies X = Prime1, Y = Sum, Z = Prime2, 3 dimensions.
#[test]
fn test_assignment_default() {
    let axes = AxisAssignment::default();

    assert_eq!(axes.x, Axis::Prime1);
    assert_eq!(axes.y, Axis::Sum);
    assert_eq!(axes.z, Some(Axis::Prime2));
    assert_eq!(axes.dimensions(), 3);
}

/// Test a 3-D assignment projects all three coordinates.
///
/// Verifies the projected triple against a known record.
#[test]
fn test_assignment_projects_3d() {
    let record = sample_record();
    let axes = AxisAssignment {
        x: Axis::Prime1,
        y: Axis::Sum,
        z: Some(Axis::Index2),
    };

    let [x, y, z] = axes.project(&record);
    assert_relative_eq!(x, 3.0);
    assert_relative_eq!(y, 10.0);
    assert_relative_eq!(z, 4.0);
}

/// Test a 2-D assignment projects z as the constant 0.
///
/// Verifies the caller-side convention for the missing third axis.
#[test]
fn test_assignment_projects_2d_constant_zero() {
    let record = sample_record();
    let axes = AxisAssignment {
        x: Axis::Index1,
        y: Axis::Sum,
        z: None,
    };

    assert_eq!(axes.dimensions(), 2);
    let [x, y, z] = axes.project(&record);
    assert_relative_eq!(x, 2.0);
    assert_relative_eq!(y, 10.0);
    assert_relative_eq!(z, 0.0);
}

/// Test any field can land on any axis.
///
/// Verifies an unconventional assignment projects faithfully.
#[test]
fn test_assignment_any_field_any_axis() {
    let record = sample_record();
    let axes = AxisAssignment {
        x: Axis::DuplicateCount,
        y: Axis::Prime2,
        z: Some(Axis::Prime1),
    };

    let [x, y, z] = axes.project(&record);
    assert_relative_eq!(x, 2.0);
    assert_relative_eq!(y, 7.0);
    assert_relative_eq!(z, 3.0);
}
