//! Execution engine for partition operations.
//!
//! ## Purpose
//!
//! This module provides the executor that fronts the algorithm layer. It
//! pairs a backend tag with the executor's policy (precondition checking),
//! validates destinations, allocates owned results, and wraps boundaries in
//! the public result types.
//!
//! ## Design notes
//!
//! * **Thin by intent**: element movement happens in the algorithm layer;
//!   the executor only adds policy, validation, and allocation.
//! * **Static dispatch**: the executor is generic over its backend tag, so
//!   every call resolves at compile time to that tag's registration, its
//!   overrides included.
//! * **Owned vs borrowed outputs**: the copying operations come in an
//!   allocating form returning [`PartitionedCopy`] and a `_into` form
//!   writing caller-provided destinations after a capacity check.
//!
//! ## Invariants
//!
//! * The backend tag and the checking flag are fixed at construction.
//! * `_into` destinations either hold the full split or the call fails
//!   before any element is written.
//! * Precondition checking only ever turns successes into errors, never
//!   changes a produced value.
//!
//! ## Non-goals
//!
//! * This module does not implement partitioning algorithms.
//! * This module does not expose builder conveniences (handled by `api`).

// Internal dependencies
use crate::algorithms::count::Count;
use crate::algorithms::partition::Partition;
use crate::engine::output::{Partitioned, PartitionedCopy};
use crate::engine::validator::Validator;
use crate::primitives::buffer::TempBuffer;
use crate::primitives::errors::CleaveError;

// ============================================================================
// Partitioner
// ============================================================================

/// Partition executor bound to a backend tag.
///
/// Construct through the builder in the `api` layer; the executor itself
/// carries no configuration beyond the tag and the checking policy.
#[derive(Debug, Clone, Copy)]
pub struct Partitioner<B: Partition> {
    /// Backend tag all operations dispatch through.
    backend: B,

    /// Whether query operations verify their input preconditions.
    check_preconditions: bool,
}

impl<B: Partition> Partitioner<B> {
    /// Assemble an executor from a backend tag and a checking policy.
    pub fn new(backend: B, check_preconditions: bool) -> Self {
        Self {
            backend,
            check_preconditions,
        }
    }

    // ========================================================================
    // In-Place Operations
    // ========================================================================

    /// Stably partition `data` in place by `pred`.
    ///
    /// # Errors
    ///
    /// [`CleaveError::AllocationFailed`] if scratch space cannot be
    /// reserved; `data` is untouched in that case.
    pub fn stable_partition<T, P>(
        &self,
        data: &mut [T],
        pred: P,
    ) -> Result<Partitioned, CleaveError>
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let len = data.len();
        let boundary = self.backend.stable_partition(data, pred)?;
        Ok(Partitioned::new(boundary, len))
    }

    /// Partition `data` in place by `pred`, without a stability guarantee.
    ///
    /// # Errors
    ///
    /// [`CleaveError::AllocationFailed`], as for
    /// [`Partitioner::stable_partition`].
    pub fn partition<T, P>(&self, data: &mut [T], pred: P) -> Result<Partitioned, CleaveError>
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let len = data.len();
        let boundary = self.backend.partition(data, pred)?;
        Ok(Partitioned::new(boundary, len))
    }

    // ========================================================================
    // Copying Operations (allocating)
    // ========================================================================

    /// Stably split `src` into owned matching and non-matching groups.
    ///
    /// # Errors
    ///
    /// [`CleaveError::AllocationFailed`] if either group cannot be
    /// allocated.
    pub fn stable_partition_copy<T, P>(
        &self,
        src: &[T],
        pred: P,
    ) -> Result<PartitionedCopy<T>, CleaveError>
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let boundary = self.backend.count_if(src, &pred);

        // Seeded values are placeholders; the split below overwrites every
        // slot of both groups.
        let mut matched = TempBuffer::from_slice(&src[..boundary])?.into_vec();
        let mut unmatched = TempBuffer::from_slice(&src[boundary..])?.into_vec();

        self.backend
            .stable_partition_copy(src, &mut matched, &mut unmatched, &pred);
        Ok(PartitionedCopy { matched, unmatched })
    }

    /// Split `src` into owned groups, without a stability guarantee.
    ///
    /// # Errors
    ///
    /// [`CleaveError::AllocationFailed`], as for
    /// [`Partitioner::stable_partition_copy`].
    pub fn partition_copy<T, P>(
        &self,
        src: &[T],
        pred: P,
    ) -> Result<PartitionedCopy<T>, CleaveError>
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let boundary = self.backend.count_if(src, &pred);

        // Seeded values are placeholders; the split below overwrites every
        // slot of both groups.
        let mut matched = TempBuffer::from_slice(&src[..boundary])?.into_vec();
        let mut unmatched = TempBuffer::from_slice(&src[boundary..])?.into_vec();

        self.backend
            .partition_copy(src, &mut matched, &mut unmatched, &pred);
        Ok(PartitionedCopy { matched, unmatched })
    }

    // ========================================================================
    // Copying Operations (caller-provided destinations)
    // ========================================================================

    /// Stably split `src` into caller-provided destinations.
    ///
    /// Returns how many elements landed in each destination.
    ///
    /// # Errors
    ///
    /// [`CleaveError::OutputTooSmall`] if either destination cannot hold
    /// its group; nothing is written in that case.
    pub fn stable_partition_copy_into<T, P>(
        &self,
        src: &[T],
        out_true: &mut [T],
        out_false: &mut [T],
        pred: P,
    ) -> Result<(usize, usize), CleaveError>
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let boundary = self.backend.count_if(src, &pred);
        Validator::validate_outputs(src.len(), boundary, out_true.len(), out_false.len())?;
        Ok(self
            .backend
            .stable_partition_copy(src, out_true, out_false, &pred))
    }

    /// Split `src` into caller-provided destinations, without a stability
    /// guarantee.
    ///
    /// # Errors
    ///
    /// [`CleaveError::OutputTooSmall`], as for
    /// [`Partitioner::stable_partition_copy_into`].
    pub fn partition_copy_into<T, P>(
        &self,
        src: &[T],
        out_true: &mut [T],
        out_false: &mut [T],
        pred: P,
    ) -> Result<(usize, usize), CleaveError>
    where
        T: Clone + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let boundary = self.backend.count_if(src, &pred);
        Validator::validate_outputs(src.len(), boundary, out_true.len(), out_false.len())?;
        Ok(self.backend.partition_copy(src, out_true, out_false, &pred))
    }

    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Boundary of already-partitioned input.
    ///
    /// # Errors
    ///
    /// [`CleaveError::PreconditionViolated`] if precondition checking is
    /// enabled and `data` is not partitioned by `pred`.
    pub fn partition_point<T, P>(&self, data: &[T], pred: P) -> Result<usize, CleaveError>
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        if self.check_preconditions && !self.backend.is_partitioned(data, &pred) {
            return Err(CleaveError::PreconditionViolated {
                operation: "partition_point",
                requirement: "input must already be partitioned by the predicate",
            });
        }
        Ok(self.backend.partition_point(data, pred))
    }

    /// Whether `data` is partitioned by `pred`.
    pub fn is_partitioned<T, P>(&self, data: &[T], pred: P) -> bool
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.backend.is_partitioned(data, pred)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The backend tag this executor dispatches through.
    #[inline]
    pub fn backend(&self) -> B {
        self.backend
    }

    /// Whether query operations verify their input preconditions.
    #[inline]
    pub fn checks_preconditions(&self) -> bool {
        self.check_preconditions
    }
}
