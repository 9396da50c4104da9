#![cfg(feature = "dev")]
//! Tests for shared error types.
//!
//! These tests verify the partition error enum for:
//! - Display formatting of every variant
//! - Equality and cloning
//! - Standard error trait integration
//!
//! ## Test Organization
//!
//! 1. **Display Formatting** - Human-readable messages per variant
//! 2. **Variant Semantics** - Equality, cloning, payload preservation
//! 3. **Error Trait** - Use through `dyn Error`

use std::error::Error;

use cleave::prelude::CleaveError;

// ============================================================================
// Display Formatting Tests
// ============================================================================

/// Test allocation failure formatting.
///
/// Verifies that the message carries the requested element count.
#[test]
fn test_display_allocation_failed() {
    let err = CleaveError::AllocationFailed { elements: 1024 };

    assert_eq!(
        err.to_string(),
        "Failed to reserve scratch space for 1024 elements"
    );
}

/// Test undersized output formatting.
///
/// Verifies that the message names the region and both capacities.
#[test]
fn test_display_output_too_small() {
    let err = CleaveError::OutputTooSmall {
        region: "matched",
        needed: 7,
        got: 3,
    };

    assert_eq!(
        err.to_string(),
        "Output 'matched' is too small: got capacity 3, need 7"
    );
}

/// Test precondition violation formatting.
///
/// Verifies that the message names the operation and the requirement.
#[test]
fn test_display_precondition_violated() {
    let err = CleaveError::PreconditionViolated {
        operation: "partition_point",
        requirement: "input must already be partitioned by the predicate",
    };

    assert_eq!(
        err.to_string(),
        "Precondition violated in 'partition_point': \
         input must already be partitioned by the predicate"
    );
}

/// Test duplicate parameter formatting.
///
/// Verifies that the message names the twice-set parameter.
#[test]
fn test_display_duplicate_parameter() {
    let err = CleaveError::DuplicateParameter {
        parameter: "check_preconditions",
    };

    assert_eq!(
        err.to_string(),
        "Parameter 'check_preconditions' was set multiple times. \
         Each parameter can only be configured once."
    );
}

/// Test invalid input formatting.
///
/// Verifies that the message carries the caller-provided description.
#[test]
fn test_display_invalid_input() {
    let err = CleaveError::InvalidInput("input must be contiguous".to_string());

    assert_eq!(err.to_string(), "Invalid input: input must be contiguous");
}

// ============================================================================
// Variant Semantics Tests
// ============================================================================

/// Test equality between identical errors.
///
/// Verifies that equal payloads compare equal and different ones do not.
#[test]
fn test_error_equality() {
    let a = CleaveError::AllocationFailed { elements: 8 };
    let b = CleaveError::AllocationFailed { elements: 8 };
    let c = CleaveError::AllocationFailed { elements: 9 };

    assert_eq!(a, b, "Identical payloads should compare equal");
    assert_ne!(a, c, "Different payloads should not compare equal");
}

/// Test cloning preserves payloads.
///
/// Verifies that a cloned error equals its source.
#[test]
fn test_error_clone() {
    let err = CleaveError::OutputTooSmall {
        region: "unmatched",
        needed: 2,
        got: 0,
    };

    assert_eq!(err.clone(), err, "Clone should preserve the payload");
}

// ============================================================================
// Error Trait Tests
// ============================================================================

/// Test use through the standard error trait.
///
/// Verifies that the enum works as a `dyn Error` with no underlying source.
#[test]
fn test_error_trait_object() {
    let err: Box<dyn Error> = Box::new(CleaveError::AllocationFailed { elements: 1 });

    assert!(err.source().is_none(), "Partition errors have no source");
    assert!(
        err.to_string().contains("scratch space"),
        "Message should flow through dyn Error"
    );
}
