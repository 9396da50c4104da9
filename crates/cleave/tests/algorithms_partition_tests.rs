#![cfg(feature = "dev")]
//! Tests for the partition algorithm family.
//!
//! These tests verify the sequential registration of the whole family for:
//! - In-place stable partitioning and its boundary report
//! - Copying partitioning into two destinations
//! - Delegation of the unstable names to the stable strategies
//! - Boundary queries and partitionedness checks
//!
//! ## Test Organization
//!
//! 1. **Stable In-Place** - Reordering, stability, edge shapes
//! 2. **Stable Copying** - Routing, ordering, truncation
//! 3. **Delegation** - Unstable names agree with stable results
//! 4. **Queries** - partition_point and is_partitioned

use cleave::prelude::*;

// ============================================================================
// Stable In-Place Tests
// ============================================================================

/// Test the canonical even/odd split.
///
/// Verifies reordering, stability, and the returned boundary.
#[test]
fn test_stable_partition_evens_first() {
    let mut values = [1, 2, 3, 4, 5, 6];

    let boundary = Seq.stable_partition(&mut values, |v| v % 2 == 0).unwrap();

    assert_eq!(boundary, 3, "Three values are even");
    assert_eq!(values, [2, 4, 6, 1, 3, 5], "Both groups keep source order");
}

/// Test an all-matching input.
///
/// Verifies that the arrangement is unchanged and the boundary is the
/// length.
#[test]
fn test_stable_partition_all_match() {
    let mut values = [2, 4, 6];

    let boundary = Seq.stable_partition(&mut values, |v| v % 2 == 0).unwrap();

    assert_eq!(boundary, values.len());
    assert_eq!(values, [2, 4, 6], "All-match input should be unchanged");
}

/// Test a no-match input.
///
/// Verifies that the arrangement is unchanged and the boundary is zero.
#[test]
fn test_stable_partition_none_match() {
    let mut values = [1, 3, 5];

    let boundary = Seq.stable_partition(&mut values, |v| v % 2 == 0).unwrap();

    assert_eq!(boundary, 0);
    assert_eq!(values, [1, 3, 5], "No-match input should be unchanged");
}

/// Test trivial inputs.
///
/// Verifies empty and single-element behavior.
#[test]
fn test_stable_partition_trivial() {
    let mut empty: [i32; 0] = [];
    assert_eq!(Seq.stable_partition(&mut empty, |_| true).unwrap(), 0);

    let mut single = [7];
    assert_eq!(Seq.stable_partition(&mut single, |v| *v > 0).unwrap(), 1);
    assert_eq!(Seq.stable_partition(&mut single, |v| *v < 0).unwrap(), 0);
    assert_eq!(single, [7]);
}

/// Test stability through tagged records.
///
/// Verifies that records with equal keys keep their original relative
/// order in both groups.
#[test]
fn test_stable_partition_stability_witness() {
    let mut records = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];

    let boundary = Seq.stable_partition(&mut records, |r| r.0 == 1).unwrap();

    assert_eq!(boundary, 3);
    assert_eq!(
        records,
        [(1, 'a'), (1, 'c'), (1, 'e'), (0, 'b'), (0, 'd')],
        "Tags must appear in source order within each group"
    );
}

/// Test idempotence.
///
/// Verifies that partitioning an already-partitioned input changes
/// nothing.
#[test]
fn test_stable_partition_idempotent() {
    let mut values = [5, 9, 2, 8, 1, 6];
    let pred = |v: &i32| v % 2 == 0;

    let first = Seq.stable_partition(&mut values, pred).unwrap();
    let snapshot = values;
    let second = Seq.stable_partition(&mut values, pred).unwrap();

    assert_eq!(first, second, "Boundary should be unchanged");
    assert_eq!(values, snapshot, "Arrangement should be unchanged");
}

/// Test partitioning owned elements.
///
/// Verifies the family works for Clone-only (non-Copy) element types.
#[test]
fn test_stable_partition_owned_elements() {
    let mut words = vec![
        "ant".to_string(),
        "bison".to_string(),
        "cat".to_string(),
        "dingo".to_string(),
    ];

    let boundary = Seq.stable_partition(&mut words, |w| w.len() == 3).unwrap();

    assert_eq!(boundary, 2);
    assert_eq!(words, ["ant", "cat", "bison", "dingo"]);
}

// ============================================================================
// Stable Copying Tests
// ============================================================================

/// Test the two-destination split.
///
/// Verifies routing, ordering, and the returned counts.
#[test]
fn test_stable_partition_copy_routes_both_groups() {
    let src = [3, 1, 4, 1, 5, 9, 2, 6];
    let mut winners = [0; 4];
    let mut losers = [0; 4];

    let (matched, unmatched) =
        Seq.stable_partition_copy(&src, &mut winners, &mut losers, |v| *v >= 4);

    assert_eq!((matched, unmatched), (4, 4));
    assert_eq!(winners, [4, 5, 9, 6], "Matching group keeps source order");
    assert_eq!(losers, [3, 1, 1, 2], "Non-matching group keeps source order");
}

/// Test that the source is untouched.
///
/// Verifies the copying contract against the original input.
#[test]
fn test_stable_partition_copy_source_intact() {
    let src = [1, 2, 3];
    let mut out_true = [0; 3];
    let mut out_false = [0; 3];

    Seq.stable_partition_copy(&src, &mut out_true, &mut out_false, |v| *v > 1);

    assert_eq!(src, [1, 2, 3], "Source should never change");
}

/// Test undersized destinations.
///
/// Verifies that each destination truncates independently at capacity.
#[test]
fn test_stable_partition_copy_truncates() {
    let src = [2, 4, 6, 8, 1];
    let mut out_true = [0; 2];
    let mut out_false = [0; 0];

    let (matched, unmatched) =
        Seq.stable_partition_copy(&src, &mut out_true, &mut out_false, |v| v % 2 == 0);

    assert_eq!(matched, 2, "Matching side should clamp at capacity");
    assert_eq!(unmatched, 0, "Zero-capacity side should write nothing");
    assert_eq!(out_true, [2, 4], "First matches fill the destination");
}

/// Test agreement with the in-place result.
///
/// Verifies that concatenating the copied groups reproduces the stably
/// partitioned arrangement.
#[test]
fn test_copy_concatenation_matches_in_place() {
    let src = [7, 2, 9, 4, 3, 8, 1];
    let pred = |v: &i32| v % 2 == 0;

    let mut out_true = [0; 7];
    let mut out_false = [0; 7];
    let (matched, unmatched) =
        Seq.stable_partition_copy(&src, &mut out_true, &mut out_false, pred);

    let mut in_place = src;
    let boundary = Seq.stable_partition(&mut in_place, pred).unwrap();

    assert_eq!(matched, boundary, "Counts should agree");
    let mut concatenated = Vec::new();
    concatenated.extend_from_slice(&out_true[..matched]);
    concatenated.extend_from_slice(&out_false[..unmatched]);
    assert_eq!(concatenated, in_place, "Copy groups should mirror the in-place result");
}

// ============================================================================
// Delegation Tests
// ============================================================================

/// Test the unstable in-place name.
///
/// Verifies that the portable strategy matches the stable result exactly.
#[test]
fn test_partition_delegates_to_stable() {
    let src = [5, 2, 7, 4, 9, 6];
    let pred = |v: &i32| *v < 5;

    let mut unstable = src;
    let mut stable = src;
    let unstable_boundary = Seq.partition(&mut unstable, pred).unwrap();
    let stable_boundary = Seq.stable_partition(&mut stable, pred).unwrap();

    assert_eq!(unstable_boundary, stable_boundary);
    assert_eq!(unstable, stable, "Portable unstable strategy is the stable one");
}

/// Test the unstable copying name.
///
/// Verifies that the portable strategy matches the stable copy exactly.
#[test]
fn test_partition_copy_delegates_to_stable() {
    let src = [5, 2, 7, 4, 9, 6];
    let pred = |v: &i32| *v < 5;

    let mut a_true = [0; 6];
    let mut a_false = [0; 6];
    let mut b_true = [0; 6];
    let mut b_false = [0; 6];

    let unstable = Seq.partition_copy(&src, &mut a_true, &mut a_false, pred);
    let stable = Seq.stable_partition_copy(&src, &mut b_true, &mut b_false, pred);

    assert_eq!(unstable, stable);
    assert_eq!(a_true, b_true);
    assert_eq!(a_false, b_false);
}

// ============================================================================
// Query Tests
// ============================================================================

/// Test the boundary query over partitioned input.
///
/// Verifies that partition_point recovers the boundary produced by
/// partitioning.
#[test]
fn test_partition_point_recovers_boundary() {
    let mut values = [8, 3, 6, 1, 4, 9];
    let pred = |v: &i32| v % 2 == 0;

    let boundary = Seq.stable_partition(&mut values, pred).unwrap();

    assert_eq!(
        Seq.partition_point(&values, pred),
        boundary,
        "Query should land on the produced boundary"
    );
}

/// Test the boundary query over unpartitioned input.
///
/// Verifies the first-failure identity holds and the call returns without
/// fault even though the precondition is unmet.
#[test]
fn test_partition_point_unpartitioned_is_first_failure() {
    let values = [2, 1, 4, 3];
    let pred = |v: &i32| v % 2 == 0;

    assert_eq!(
        Seq.partition_point(&values, pred),
        Seq.find_if_not(&values, pred),
        "The query is the first-failure search by definition"
    );
}

/// Test partitionedness detection.
///
/// Verifies acceptance of partitioned shapes and rejection of interleaved
/// ones.
#[test]
fn test_is_partitioned() {
    let pred = |v: &i32| v % 2 == 0;

    assert!(Seq.is_partitioned(&[2, 4, 1, 3], pred));
    assert!(Seq.is_partitioned(&[2, 4, 6], pred), "All-match is partitioned");
    assert!(Seq.is_partitioned(&[1, 3, 5], pred), "No-match is partitioned");
    let empty: [i32; 0] = [];
    assert!(Seq.is_partitioned(&empty, pred), "Empty is partitioned");
    assert!(!Seq.is_partitioned(&[1, 2], pred), "A match after a miss is not");
}

/// Test that partitioning establishes the check.
///
/// Verifies the family's roundtrip: partition output always satisfies
/// is_partitioned.
#[test]
fn test_partition_establishes_is_partitioned() {
    let mut values = [9, 4, 7, 2, 5, 8, 3, 6, 1];
    let pred = |v: &i32| *v > 4;

    Seq.stable_partition(&mut values, pred).unwrap();

    assert!(
        Seq.is_partitioned(&values, pred),
        "Partition output must pass the partitionedness check"
    );
}
