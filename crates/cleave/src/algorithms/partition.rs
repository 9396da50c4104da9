//! Partition algorithm family.
//!
//! ## Purpose
//!
//! This module composes the primitive traits into the partition family:
//! reorder a sequence so that elements satisfying a predicate precede those
//! that do not, plus the copying, querying, and verifying relatives.
//!
//! ## Design notes
//!
//! * **Composition over invention**: every operation here is expressed
//!   through the primitives ([`Count`], [`RemoveCopy`], [`Search`],
//!   [`Ordered`]). A backend that accelerates a primitive accelerates the
//!   whole family without touching this module.
//! * **Registration**: `impl Partition for Tag {}` registers a backend tag;
//!   the tag must already register the four primitive traits.
//! * **Stable by default**: the in-place algorithm IS the stable algorithm.
//!   [`Partition::partition`] merely forwards to it; the separate name
//!   records that callers asked for the weaker contract and lets a backend
//!   substitute a cheaper unstable strategy.
//! * **Scratch space**: the in-place algorithm stages a full copy of the
//!   input in a [`TempBuffer`] and reports allocation failure instead of
//!   aborting.
//!
//! ## Key concepts
//!
//! * **Boundary**: the number of matching elements; after partitioning,
//!   indices `0..boundary` match and `boundary..len` do not.
//! * **Stability**: relative order within the matching group and within the
//!   non-matching group is preserved.
//!
//! ## Invariants
//!
//! * The predicate is applied to elements, never to their positions.
//! * In-place partitioning leaves the data unchanged on failure; the
//!   scratch allocation happens before the first write.
//! * Copying partitioning writes each source element to exactly one
//!   destination and never overlaps regions.
//!
//! ## Non-goals
//!
//! * This module does not sort; partitioning is the coarsest reordering.
//! * This module does not validate destination capacities; the engine layer
//!   owns that policy.

// Internal dependencies
use crate::algorithms::copying::RemoveCopy;
use crate::algorithms::count::Count;
use crate::algorithms::ordering::Ordered;
use crate::algorithms::search::Search;
use crate::primitives::backend::Seq;
use crate::primitives::buffer::TempBuffer;
use crate::primitives::errors::CleaveError;

// ============================================================================
// Partition Family
// ============================================================================

/// Partition algorithms, dispatched over backend tags.
pub trait Partition: Count + RemoveCopy + Search + Ordered {
    /// Stably partition `data` in place by `pred`.
    ///
    /// On success every element satisfying `pred` precedes every element
    /// that does not, relative order preserved within both groups, and the
    /// returned boundary is the size of the matching group.
    ///
    /// # Algorithm
    ///
    /// 1. Stage a copy of the input in scratch space.
    /// 2. Count the matching elements to locate the boundary.
    /// 3. Split the original at the boundary.
    /// 4. Refill the front from the staged copy, dropping non-matchers.
    /// 5. Refill the back from the staged copy, dropping matchers.
    ///
    /// # Errors
    ///
    /// [`CleaveError::AllocationFailed`] if scratch space for `data.len()`
    /// elements cannot be reserved. The input is untouched in that case.
    fn stable_partition<T, P>(&self, data: &mut [T], pred: P) -> Result<usize, CleaveError>
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let staged = TempBuffer::from_slice(data)?;
        let boundary = self.count_if(data, &pred);

        // The two regions partition the slice, so the refills cannot overlap.
        let (matched, unmatched) = data.split_at_mut(boundary);
        self.remove_copy_if(staged.as_slice(), matched, |item| !pred(item));
        self.remove_copy_if(staged.as_slice(), unmatched, &pred);

        Ok(boundary)
    }

    /// Stably split `src` into `out_true` (matching) and `out_false`
    /// (non-matching), preserving relative order in both.
    ///
    /// Returns how many elements landed in each destination. Writing into a
    /// destination stops when it fills up, so undersized destinations
    /// truncate rather than fail; the engine layer rejects them up front
    /// when asked to.
    fn stable_partition_copy<T, P>(
        &self,
        src: &[T],
        out_true: &mut [T],
        out_false: &mut [T],
        pred: P,
    ) -> (usize, usize)
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let matched = self.remove_copy_if(src, out_true, |item| !pred(item));
        let unmatched = self.remove_copy_if(src, out_false, &pred);
        (matched, unmatched)
    }

    /// Partition `data` in place by `pred`, without a stability guarantee.
    ///
    /// The portable strategy is the stable one; backends may substitute an
    /// unstable strategy with a better constant factor.
    ///
    /// # Errors
    ///
    /// [`CleaveError::AllocationFailed`], as for
    /// [`Partition::stable_partition`].
    fn partition<T, P>(&self, data: &mut [T], pred: P) -> Result<usize, CleaveError>
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.stable_partition(data, pred)
    }

    /// Split `src` into two destinations, without a stability guarantee.
    ///
    /// The portable strategy is the stable one; see
    /// [`Partition::stable_partition_copy`] for the contract.
    fn partition_copy<T, P>(
        &self,
        src: &[T],
        out_true: &mut [T],
        out_false: &mut [T],
        pred: P,
    ) -> (usize, usize)
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.stable_partition_copy(src, out_true, out_false, pred)
    }

    /// Boundary of already-partitioned input: the index of the first
    /// element NOT satisfying `pred`, or `data.len()`.
    ///
    /// Meaningful only over partitioned input. Over arbitrary input the
    /// result is still the first failing position, just not a partition
    /// boundary.
    fn partition_point<T, P>(&self, data: &[T], pred: P) -> usize
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.find_if_not(data, pred)
    }

    /// Whether `data` is partitioned by `pred`: all matching elements
    /// precede all non-matching ones.
    ///
    /// Viewed through the key `!pred`, matching elements map to `false` and
    /// non-matching to `true`, so partitioned input is exactly input whose
    /// keys are sorted.
    fn is_partitioned<T, P>(&self, data: &[T], pred: P) -> bool
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.is_sorted_by_key(data, |item| !pred(item))
    }
}

// ============================================================================
// Registrations
// ============================================================================

impl Partition for Seq {}
