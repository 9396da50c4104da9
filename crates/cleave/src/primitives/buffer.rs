//! Scoped temporary buffers for partition operations.
//!
//! ## Purpose
//!
//! This module provides `TempBuffer`, a call-scoped copy of an input range.
//! The in-place partition algorithms read element order from the buffer while
//! rewriting the caller's storage in place.
//!
//! ## Design notes
//!
//! * **Fallible acquisition**: storage is reserved with `try_reserve_exact`,
//!   so exhaustion surfaces as [`CleaveError::AllocationFailed`] before any
//!   destination write happens.
//! * **Call-scoped**: a buffer lives for one algorithm invocation and is
//!   released when it goes out of scope, on every exit path.
//! * **No recycling**: nothing is pooled or kept across calls.
//!
//! ## Invariants
//!
//! * A buffer built by `from_slice` holds exactly the source's elements in
//!   source order.
//! * Acquisition either yields a fully usable buffer or an error; there is no
//!   partially initialized state.
//!
//! ## Non-goals
//!
//! * This module does not manage long-lived workspaces or allocator tuning.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::CleaveError;

// ============================================================================
// Temporary Buffer
// ============================================================================

/// Call-scoped element buffer with fallible acquisition.
#[derive(Debug, Clone)]
pub struct TempBuffer<T> {
    storage: Vec<T>,
}

impl<T> TempBuffer<T> {
    /// Create an empty buffer with room for `elements` items.
    pub fn with_capacity(elements: usize) -> Result<Self, CleaveError> {
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(elements)
            .map_err(|_| CleaveError::AllocationFailed { elements })?;
        Ok(Self { storage })
    }

    /// View the buffered elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Number of buffered elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Consume the buffer and take ownership of its storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }
}

impl<T: Clone> TempBuffer<T> {
    /// Copy `src` into a fresh buffer.
    pub fn from_slice(src: &[T]) -> Result<Self, CleaveError> {
        let mut buffer = Self::with_capacity(src.len())?;
        buffer.storage.extend_from_slice(src);
        Ok(buffer)
    }
}
