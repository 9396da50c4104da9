//! Input validation for partition configuration and destinations.
//!
//! ## Purpose
//!
//! This module provides the validation functions guarding the executor. It
//! checks builder state and destination capacities so that the algorithm
//! layer's clamping behavior is never reached through the public API
//! without the caller opting out.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **No data checks**: Element values are opaque here; only sizes and
//!   configuration are inspected.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A passing capacity check guarantees the copying algorithms never
//!   truncate for that call.
//!
//! ## Non-goals
//!
//! * This module does not partition or copy data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::CleaveError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for partition configuration and destinations.
///
/// Provides static methods returning `Result<(), CleaveError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Destination Validation
    // ========================================================================

    /// Validate that two destinations can hold a full split of the source.
    ///
    /// `boundary` is the number of source elements satisfying the
    /// predicate; the rest go to the unmatched destination.
    pub fn validate_outputs(
        len: usize,
        boundary: usize,
        matched_capacity: usize,
        unmatched_capacity: usize,
    ) -> Result<(), CleaveError> {
        // Check 1: Matched region capacity
        if matched_capacity < boundary {
            return Err(CleaveError::OutputTooSmall {
                region: "matched",
                needed: boundary,
                got: matched_capacity,
            });
        }

        // Check 2: Unmatched region capacity
        let unmatched = len - boundary;
        if unmatched_capacity < unmatched {
            return Err(CleaveError::OutputTooSmall {
                region: "unmatched",
                needed: unmatched,
                got: unmatched_capacity,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CleaveError> {
        if let Some(param) = duplicate_param {
            return Err(CleaveError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
