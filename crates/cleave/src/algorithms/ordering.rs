//! Sortedness primitives.
//!
//! ## Purpose
//!
//! This module defines adjacent-pair ordering checks. The partition layer
//! verifies partitionedness by mapping elements through a boolean key and
//! checking the keys are sorted, so the ordering primitives double as the
//! partition verifier.
//!
//! ## Design notes
//!
//! * **Registration**: `impl Ordered for Tag {}` registers a backend tag
//!   with the portable default bodies.
//! * **Specialization**: a tag overrides either method to substitute its
//!   own strategy; adjacent-pair checks parallelize cleanly because every
//!   pair is independent.
//! * **Non-strict**: equal neighbors count as sorted.
//! * **Partial orders**: incomparable neighbors (e.g., NaN on either side)
//!   make the check fail, matching `PartialOrd` semantics.
//!
//! ## Invariants
//!
//! * Empty and single-element inputs are always sorted.
//! * The keyed variant invokes `key` on both sides of every adjacent pair;
//!   keys are recomputed, never cached.
//!
//! ## Non-goals
//!
//! * This module does not sort; it only observes.
//! * This module does not report the position of the first violation.

// Internal dependencies
use crate::primitives::backend::{Backend, Seq};

// ============================================================================
// Ordering Primitives
// ============================================================================

/// Adjacent-pair ordering primitives, dispatched over backend tags.
pub trait Ordered: Backend {
    /// Whether `data` is sorted in non-decreasing order.
    fn is_sorted<T>(&self, data: &[T]) -> bool
    where
        T: PartialOrd + Sync,
    {
        data.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Whether `data` is sorted in non-decreasing order of `key`.
    fn is_sorted_by_key<T, U, F>(&self, data: &[T], key: F) -> bool
    where
        T: Sync,
        U: PartialOrd,
        F: Fn(&T) -> U + Sync + Send,
    {
        data.windows(2).all(|pair| key(&pair[0]) <= key(&pair[1]))
    }
}

// ============================================================================
// Registrations
// ============================================================================

impl Ordered for Seq {}
