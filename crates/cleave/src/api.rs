//! High-level API for partition operations.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring executor policy and choosing an
//! execution backend tag, ending in a validated [`Partitioner`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all options.
//! * **Polymorphic**: The backend pivot transitions to a builder typed by
//!   the chosen tag, so the finished executor dispatches statically.
//! * **Validated**: Builder state is validated when `.build()` is called.
//!
//! ## Key concepts
//!
//! * **Backend Tags**: [`Seq`] here; extension crates register more.
//! * **Configuration Flow**: Builder pattern ending in `.backend(Tag)`.
//! * **Validation**: Duplicate parameter sets are rejected at build time.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CleaveBuilder`] via `Cleave::new()`.
//! 2. Chain configuration methods (`.check_preconditions()`, ...).
//! 3. Select a backend via `.backend(Seq)` to get a typed builder.
//! 4. Call `.build()` to obtain a [`Partitioner`].

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::copying::RemoveCopy;
pub use crate::algorithms::count::Count;
pub use crate::algorithms::ordering::Ordered;
pub use crate::algorithms::partition::Partition;
pub use crate::algorithms::search::Search;
pub use crate::engine::executor::Partitioner;
pub use crate::engine::output::{Partitioned, PartitionedCopy};
pub use crate::primitives::backend::{Backend, Seq};
pub use crate::primitives::condition::{
    Errc, ErrorCategory, ErrorCondition, ErrorConditionEnum, generic_category,
    make_error_condition,
};
pub use crate::primitives::errors::CleaveError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring partition execution.
#[derive(Debug, Clone)]
pub struct CleaveBuilder {
    /// Verify input preconditions in query operations.
    pub check_preconditions: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for CleaveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CleaveBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            check_preconditions: None,
            duplicate_param: None,
        }
    }

    /// Enable or disable precondition checking in query operations.
    ///
    /// Off by default: `partition_point` then trusts the caller that the
    /// input is partitioned, matching the algorithm layer's contract.
    pub fn check_preconditions(mut self, enabled: bool) -> Self {
        if self.check_preconditions.is_some() {
            self.duplicate_param = Some("check_preconditions");
        }
        self.check_preconditions = Some(enabled);
        self
    }

    /// Select an execution backend to transition to a typed builder.
    pub fn backend<B: Partition>(self, backend: B) -> PartitionerBuilder<B> {
        PartitionerBuilder {
            backend,
            check_preconditions: self.check_preconditions,
            duplicate_param: self.duplicate_param,
        }
    }
}

// ============================================================================
// Typed Builder
// ============================================================================

/// Builder stage with the backend tag chosen.
#[derive(Debug, Clone)]
pub struct PartitionerBuilder<B: Partition> {
    backend: B,
    check_preconditions: Option<bool>,
    duplicate_param: Option<&'static str>,
}

impl<B: Partition> PartitionerBuilder<B> {
    /// Validate the accumulated configuration and build the executor.
    ///
    /// # Errors
    ///
    /// [`CleaveError::DuplicateParameter`] if any builder parameter was set
    /// more than once.
    pub fn build(self) -> Result<Partitioner<B>, CleaveError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(Partitioner::new(
            self.backend,
            self.check_preconditions.unwrap_or(false),
        ))
    }
}
