//! Input abstractions for partition operations.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over partition inputs,
//! allowing the convenience entry points to process multiple data formats
//! (slices, vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Interoperability**: Bridges standard Rust collections with specialized numerical libraries.
//! * **Fail-fast validation**: Ensures memory continuity for array types before processing.
//!
//! ## Key concepts
//!
//! * **CleaveInput Trait**: The core abstraction that requires types to provide a contiguous slice view.
//! * **Memory Continuity**: Required for slice-based partitioning.
//!
//! ## Invariants
//!
//! * Returned slices must represent all elements in the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not copy non-contiguous inputs into contiguous form.
//! * This module does not handle data reshaping or dimensionality reduction.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};

// Export dependencies from cleave crate
use cleave::prelude::CleaveError;

/// Trait for types that can be used as input for partition operations.
pub trait CleaveInput<T> {
    /// Convert the input to a contiguous slice.
    fn as_cleave_slice(&self) -> Result<&[T], CleaveError>;
}

impl<T> CleaveInput<T> for [T] {
    fn as_cleave_slice(&self) -> Result<&[T], CleaveError> {
        Ok(self)
    }
}

impl<T> CleaveInput<T> for Vec<T> {
    fn as_cleave_slice(&self) -> Result<&[T], CleaveError> {
        Ok(self.as_slice())
    }
}

impl<T, S> CleaveInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_cleave_slice(&self) -> Result<&[T], CleaveError> {
        self.as_slice().ok_or_else(|| {
            CleaveError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
