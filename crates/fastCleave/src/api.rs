//! High-level API for partition operations with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for
//! partitioning with multi-threaded execution. It extends the `cleave` API
//! with the parallel backend tag, flexible input handling, and a one-shot
//! convenience entry point.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `cleave` builder pattern.
//! * **Parallel-First**: The [`Par`] tag utilizes all available CPU cores.
//! * **Transparent**: The base crate's types pass through unchanged; code
//!   written against `cleave::prelude` compiles against this prelude.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` for acceleration, gated behind the
//!   `cpu` feature.
//! * **Flexible Inputs**: [`CleaveInput`] accepts slices, vectors, and
//!   one-dimensional `ndarray` arrays.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Cleave`] builder via `Cleave::new()`.
//! 2. Chain configuration methods (`.check_preconditions()`, ...).
//! 3. Select the parallel backend via `.backend(Par)` and `.build()`.

// Publicly re-exported types
pub use crate::backend::Par;
pub use crate::input::CleaveInput;
pub use cleave::prelude::{
    Backend, Cleave, CleaveError, Count, Errc, ErrorCategory, ErrorCondition, ErrorConditionEnum,
    Ordered, Partition, Partitioned, PartitionedCopy, Partitioner, RemoveCopy, Search, Seq,
    generic_category, make_error_condition,
};

// ============================================================================
// Convenience Entry Points
// ============================================================================

/// One-shot copying partition of any supported input container.
///
/// Splits `input` into owned matching and non-matching groups on the given
/// backend, leaving the source untouched.
///
/// # Errors
///
/// [`CleaveError::InvalidInput`] if the container is not contiguous in
/// memory, or [`CleaveError::AllocationFailed`] if the groups cannot be
/// allocated.
pub fn partition_of<T, I, B, P>(
    input: &I,
    backend: B,
    pred: P,
) -> Result<PartitionedCopy<T>, CleaveError>
where
    T: Clone + Sync,
    I: CleaveInput<T> + ?Sized,
    B: Partition,
    P: Fn(&T) -> bool + Sync + Send,
{
    let data = input.as_cleave_slice()?;
    let partitioner = Cleave::new().backend(backend).build()?;
    partitioner.partition_copy(data, pred)
}
