//! Filtered copying primitive.
//!
//! ## Purpose
//!
//! This module defines the filtered copy that partition algorithms are built
//! from: copy the elements NOT satisfying a predicate into a destination,
//! preserving their relative order. Running it twice, once with the
//! predicate negated, routes every source element to exactly one of two
//! destinations.
//!
//! ## Design notes
//!
//! * **Registration**: `impl RemoveCopy for Tag {}` registers a backend tag
//!   with the portable default body.
//! * **Specialization**: a tag overrides [`RemoveCopy::remove_copy_if`] to
//!   substitute its own strategy.
//! * **Removal framing**: the predicate selects elements to DROP, not to
//!   keep. Callers wanting keep-semantics negate at the call site.
//! * **Capacity clamp**: writing stops when the destination is full; the
//!   return value reports how many elements were actually written.
//!
//! ## Invariants
//!
//! * Surviving elements appear in `dest` in their source order.
//! * `dest` slots past the returned count are left untouched.
//! * The source is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not allocate; destinations are caller-provided.
//! * This module does not deduplicate or reorder surviving elements.

// Internal dependencies
use crate::primitives::backend::{Backend, Seq};

// ============================================================================
// Remove-Copy Primitive
// ============================================================================

/// Filtered copying primitive, dispatched over backend tags.
pub trait RemoveCopy: Backend {
    /// Copy elements of `src` NOT satisfying `pred` into `dest`, in order.
    ///
    /// Returns the number of elements written. Writing stops early if
    /// `dest` fills up.
    fn remove_copy_if<T, P>(&self, src: &[T], dest: &mut [T], pred: P) -> usize
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let mut written = 0;
        for item in src {
            if !pred(item) {
                if written == dest.len() {
                    break;
                }
                dest[written] = item.clone();
                written += 1;
            }
        }
        written
    }
}

// ============================================================================
// Registrations
// ============================================================================

impl RemoveCopy for Seq {}
