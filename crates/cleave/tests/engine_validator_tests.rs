#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify the validation functions guarding the executor for:
//! - Destination capacity checks for copying partitions
//! - Builder duplicate-parameter detection
//!
//! ## Test Organization
//!
//! 1. **Destination Validation** - Capacity checks per region
//! 2. **Builder Validation** - Duplicate parameter reporting

use cleave::internals::engine::validator::Validator;
use cleave::internals::primitives::errors::CleaveError;

// ============================================================================
// Destination Validation Tests
// ============================================================================

/// Test exactly-sized destinations.
///
/// Verifies that a perfect fit passes.
#[test]
fn test_validate_outputs_exact_fit() {
    assert!(Validator::validate_outputs(10, 4, 4, 6).is_ok());
}

/// Test oversized destinations.
///
/// Verifies that spare capacity passes.
#[test]
fn test_validate_outputs_spare_capacity() {
    assert!(Validator::validate_outputs(10, 4, 100, 100).is_ok());
}

/// Test an undersized matched destination.
///
/// Verifies the error names the matched region with both capacities.
#[test]
fn test_validate_outputs_matched_too_small() {
    let result = Validator::validate_outputs(10, 4, 3, 6);

    assert_eq!(
        result.unwrap_err(),
        CleaveError::OutputTooSmall {
            region: "matched",
            needed: 4,
            got: 3,
        }
    );
}

/// Test an undersized unmatched destination.
///
/// Verifies the error names the unmatched region with both capacities.
#[test]
fn test_validate_outputs_unmatched_too_small() {
    let result = Validator::validate_outputs(10, 4, 4, 5);

    assert_eq!(
        result.unwrap_err(),
        CleaveError::OutputTooSmall {
            region: "unmatched",
            needed: 6,
            got: 5,
        }
    );
}

/// Test the matched check runs first.
///
/// Verifies that with both regions undersized, the matched region is
/// reported.
#[test]
fn test_validate_outputs_matched_checked_first() {
    let result = Validator::validate_outputs(10, 4, 0, 0);

    assert_eq!(
        result.unwrap_err(),
        CleaveError::OutputTooSmall {
            region: "matched",
            needed: 4,
            got: 0,
        },
        "Validation should fail fast on the first region"
    );
}

/// Test empty input.
///
/// Verifies that zero-length sources accept zero-capacity destinations.
#[test]
fn test_validate_outputs_empty_source() {
    assert!(Validator::validate_outputs(0, 0, 0, 0).is_ok());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test a clean builder state.
///
/// Verifies that no duplicate marker passes.
#[test]
fn test_validate_no_duplicates_clean() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
}

/// Test a recorded duplicate.
///
/// Verifies that the marker turns into the matching error.
#[test]
fn test_validate_no_duplicates_detects() {
    let result = Validator::validate_no_duplicates(Some("check_preconditions"));

    assert_eq!(
        result.unwrap_err(),
        CleaveError::DuplicateParameter {
            parameter: "check_preconditions",
        }
    );
}
