//! Predicate search primitive.
//!
//! ## Purpose
//!
//! This module defines the forward search for the first element failing a
//! predicate. Over partitioned input, that position is exactly the partition
//! boundary, which is how the partition layer locates split points without
//! a dedicated algorithm.
//!
//! ## Design notes
//!
//! * **Registration**: `impl Search for Tag {}` registers a backend tag
//!   with the portable default body.
//! * **Specialization**: a tag overrides [`Search::find_if_not`] to
//!   substitute its own strategy; parallel overrides must still report the
//!   FIRST failing position, not an arbitrary one.
//! * **Miss convention**: when every element satisfies the predicate, the
//!   result is `data.len()`, mirroring an end iterator.
//!
//! ## Invariants
//!
//! * The result is in `0..=data.len()`.
//! * Every element before the result satisfies the predicate.
//!
//! ## Non-goals
//!
//! * This module does not binary-search; the input carries no ordering
//!   assumption here.

// Internal dependencies
use crate::primitives::backend::{Backend, Seq};

// ============================================================================
// Search Primitive
// ============================================================================

/// Forward search primitive, dispatched over backend tags.
pub trait Search: Backend {
    /// Index of the first element NOT satisfying `pred`, or `data.len()`.
    fn find_if_not<T, P>(&self, data: &[T], pred: P) -> usize
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        data.iter().position(|item| !pred(item)).unwrap_or(data.len())
    }
}

// ============================================================================
// Registrations
// ============================================================================

impl Search for Seq {}
