//! Parallel registrations for the partition primitives.
//!
//! ## Purpose
//!
//! This module registers the [`Par`] tag with every primitive trait and
//! with the partition family, overriding the primitives whose work scales
//! with input length. The family's algorithms are inherited unchanged and
//! pick up the parallel primitives through dispatch.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU
//!   cores.
//! * **Sequential floor**: inputs shorter than [`PAR_MIN_LEN`] are handed
//!   to the sequential backend; below that length the fan-out overhead
//!   dominates the work.
//! * **Order preservation**: parallel collects and searches keep source
//!   order, so the stability contract of the family survives acceleration.
//! * **Feature-gated**: without the `cpu` feature every registration is
//!   empty and the portable bodies run.
//!
//! ## Key concepts
//!
//! * **Registration**: an `impl Trait for Par` block, empty or overriding.
//! * **Two-phase copy**: the filtered copy selects survivors in parallel,
//!   then writes them sequentially to keep destination order.
//!
//! ## Invariants
//!
//! * Every override is observationally identical to the portable body it
//!   replaces.
//! * Predicates may run concurrently and in any order; the trait bounds
//!   (`Sync + Send`) make that sound.
//!
//! ## Non-goals
//!
//! * This module does not configure the thread pool; `rayon`'s global pool
//!   conventions apply.
//! * This module does not re-implement the partition family; only the
//!   primitives are overridden.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Export dependencies from cleave crate
#[cfg(feature = "cpu")]
use cleave::prelude::Seq;
use cleave::prelude::{Count, Ordered, Partition, RemoveCopy, Search};

// Internal dependencies
use crate::backend::Par;

// ============================================================================
// Tuning
// ============================================================================

/// Inputs shorter than this run on the sequential backend.
#[cfg(feature = "cpu")]
pub const PAR_MIN_LEN: usize = 4096;

// ============================================================================
// Primitive Registrations
// ============================================================================

impl Count for Par {
    #[cfg(feature = "cpu")]
    fn count_if<T, P>(&self, data: &[T], pred: P) -> usize
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        if data.len() < PAR_MIN_LEN {
            return Seq.count_if(data, pred);
        }

        data.par_iter().filter(|item| pred(item)).count()
    }
}

impl RemoveCopy for Par {
    #[cfg(feature = "cpu")]
    fn remove_copy_if<T, P>(&self, src: &[T], dest: &mut [T], pred: P) -> usize
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        if src.len() < PAR_MIN_LEN {
            return Seq.remove_copy_if(src, dest, pred);
        }

        // Phase 1: select survivors in parallel, keeping source order.
        let kept: Vec<&T> = src.par_iter().filter(|item| !pred(item)).collect();

        // Phase 2: write them out sequentially, clamped to capacity.
        let written = kept.len().min(dest.len());
        for (slot, item) in dest.iter_mut().zip(&kept[..written]) {
            *slot = (*item).clone();
        }
        written
    }
}

impl Search for Par {
    #[cfg(feature = "cpu")]
    fn find_if_not<T, P>(&self, data: &[T], pred: P) -> usize
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        if data.len() < PAR_MIN_LEN {
            return Seq.find_if_not(data, pred);
        }

        data.par_iter()
            .position_first(|item| !pred(item))
            .unwrap_or(data.len())
    }
}

impl Ordered for Par {
    #[cfg(feature = "cpu")]
    fn is_sorted<T>(&self, data: &[T]) -> bool
    where
        T: PartialOrd + Sync,
    {
        if data.len() < PAR_MIN_LEN {
            return Seq.is_sorted(data);
        }

        data.par_windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[cfg(feature = "cpu")]
    fn is_sorted_by_key<T, U, F>(&self, data: &[T], key: F) -> bool
    where
        T: Sync,
        U: PartialOrd,
        F: Fn(&T) -> U + Sync + Send,
    {
        if data.len() < PAR_MIN_LEN {
            return Seq.is_sorted_by_key(data, key);
        }

        data.par_windows(2).all(|pair| key(&pair[0]) <= key(&pair[1]))
    }
}

// ============================================================================
// Family Registration
// ============================================================================

impl Partition for Par {}
