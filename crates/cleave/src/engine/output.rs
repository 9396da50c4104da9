//! Output types and result structures for partition operations.
//!
//! ## Purpose
//!
//! This module defines the result types returned by the executor: a
//! boundary report for in-place partitioning and an owned two-group split
//! for copying partitioning.
//!
//! ## Design notes
//!
//! * **Plain data**: results carry no backend state and no borrowed data;
//!   they outlive the partitioner that produced them.
//! * **Ergonomics**: both types implement `Display` for human-readable
//!   output.
//! * **Counts only**: `Display` never prints element values, so it needs
//!   no bounds on the element type.
//!
//! ## Invariants
//!
//! * `boundary <= len` always holds for [`Partitioned`].
//! * The two groups of a [`PartitionedCopy`] together hold every source
//!   element exactly once, each group in source order.
//!
//! ## Non-goals
//!
//! * This module does not perform partitioning; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// In-Place Result
// ============================================================================

/// Boundary report from an in-place partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioned {
    /// Number of elements satisfying the predicate.
    pub boundary: usize,

    /// Total number of elements partitioned.
    pub len: usize,
}

impl Partitioned {
    /// Assemble a report from a boundary and the input length.
    #[inline]
    pub fn new(boundary: usize, len: usize) -> Self {
        Self { boundary, len }
    }

    /// Size of the matching group.
    #[inline]
    pub fn matched_len(&self) -> usize {
        self.boundary
    }

    /// Size of the non-matching group.
    #[inline]
    pub fn unmatched_len(&self) -> usize {
        self.len - self.boundary
    }

    /// Whether the partitioned input was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Display for Partitioned {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} of {} elements matched (boundary at {})",
            self.matched_len(),
            self.len,
            self.boundary
        )
    }
}

// ============================================================================
// Copying Result
// ============================================================================

/// Owned two-group split from a copying partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedCopy<T> {
    /// Elements satisfying the predicate, in source order.
    pub matched: Vec<T>,

    /// Elements not satisfying the predicate, in source order.
    pub unmatched: Vec<T>,
}

impl<T> PartitionedCopy<T> {
    /// Total number of elements across both groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// Whether both groups are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.unmatched.is_empty()
    }

    /// Consume the result, yielding the two groups.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.matched, self.unmatched)
    }
}

impl<T> Display for PartitionedCopy<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:  {}", self.len())?;
        writeln!(f, "  Matched:   {}", self.matched.len())?;
        writeln!(f, "  Unmatched: {}", self.unmatched.len())?;
        Ok(())
    }
}
