#![cfg(feature = "dev")]
//! Tests for scratch buffer management.
//!
//! These tests verify the temporary buffer used by the in-place partition
//! algorithm for:
//! - Fallible construction with explicit capacity
//! - Construction from existing slices
//! - Accessors and ownership transfer
//! - Allocation failure reporting
//!
//! ## Test Organization
//!
//! 1. **Construction** - Capacity and slice-based construction
//! 2. **Accessors** - Slice view, length, emptiness, ownership transfer
//! 3. **Failure Reporting** - Oversized reservations fail cleanly

use cleave::internals::primitives::buffer::TempBuffer;
use cleave::internals::primitives::errors::CleaveError;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test construction with explicit capacity.
///
/// Verifies that a fresh buffer reserves space but holds no elements.
#[test]
fn test_with_capacity_empty() {
    let buffer = TempBuffer::<u32>::with_capacity(16).unwrap();

    assert_eq!(buffer.len(), 0, "Fresh buffer should hold no elements");
    assert!(buffer.is_empty(), "Fresh buffer should be empty");
}

/// Test construction with zero capacity.
///
/// Verifies that a zero-element reservation succeeds.
#[test]
fn test_with_capacity_zero() {
    let buffer = TempBuffer::<u32>::with_capacity(0).unwrap();

    assert!(buffer.is_empty(), "Zero-capacity buffer should be empty");
}

/// Test construction from a slice.
///
/// Verifies that the buffer stages an exact copy of the source.
#[test]
fn test_from_slice_copies_source() {
    let source = [3, 1, 4, 1, 5];
    let buffer = TempBuffer::from_slice(&source).unwrap();

    assert_eq!(buffer.len(), source.len(), "Buffer should match source length");
    assert_eq!(buffer.as_slice(), &source, "Buffer should copy source contents");
}

/// Test construction from an empty slice.
///
/// Verifies that empty sources produce empty buffers.
#[test]
fn test_from_slice_empty() {
    let source: [u8; 0] = [];
    let buffer = TempBuffer::from_slice(&source).unwrap();

    assert!(buffer.is_empty(), "Empty source should produce empty buffer");
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test ownership transfer out of the buffer.
///
/// Verifies that `into_vec` yields the staged elements.
#[test]
fn test_into_vec_transfers_contents() {
    let buffer = TempBuffer::from_slice(&[10, 20, 30]).unwrap();
    let contents = buffer.into_vec();

    assert_eq!(contents, vec![10, 20, 30], "into_vec should yield staged elements");
}

/// Test that clones are independent.
///
/// Verifies that mutating a clone's contents leaves the original intact.
#[test]
fn test_clone_is_independent() {
    let original = TempBuffer::from_slice(&[1, 2, 3]).unwrap();
    let mut cloned = original.clone().into_vec();
    cloned[0] = 99;

    assert_eq!(original.as_slice(), &[1, 2, 3], "Original should be unchanged");
}

// ============================================================================
// Failure Reporting Tests
// ============================================================================

/// Test that an impossible reservation is reported.
///
/// Verifies that a capacity whose byte size overflows is rejected with the
/// element count preserved, without touching the allocator.
#[test]
fn test_with_capacity_overflow_fails() {
    let elements = usize::MAX / 2;
    let result = TempBuffer::<u64>::with_capacity(elements);

    assert_eq!(
        result.unwrap_err(),
        CleaveError::AllocationFailed { elements },
        "Oversized reservation should report the requested element count"
    );
}
