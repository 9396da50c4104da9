//! Predicate counting primitive.
//!
//! ## Purpose
//!
//! This module defines the counting primitive that partition algorithms use
//! to locate the boundary between matching and non-matching elements before
//! any element moves.
//!
//! ## Design notes
//!
//! * **Registration**: `impl Count for Tag {}` registers a backend tag with
//!   the portable default body.
//! * **Specialization**: a tag overrides [`Count::count_if`] to substitute
//!   its own strategy; callers resolve the override statically.
//! * **Bounds**: element and predicate bounds admit shared-state backends,
//!   so overrides can fan work out across threads without changing the
//!   signature.
//!
//! ## Invariants
//!
//! * The result never exceeds `data.len()`.
//! * The predicate is observed, never the elements mutated.
//!
//! ## Non-goals
//!
//! * This module does not provide counting by value equality; callers wrap
//!   the comparison in a predicate.

// Internal dependencies
use crate::primitives::backend::{Backend, Seq};

// ============================================================================
// Count Primitive
// ============================================================================

/// Counting primitive, dispatched over backend tags.
pub trait Count: Backend {
    /// Number of elements in `data` satisfying `pred`.
    fn count_if<T, P>(&self, data: &[T], pred: P) -> usize
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        data.iter().filter(|item| pred(item)).count()
    }
}

// ============================================================================
// Registrations
// ============================================================================

impl Count for Seq {}
