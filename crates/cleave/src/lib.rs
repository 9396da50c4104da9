//! # Cleave — Stable Partitioning for Rust
//!
//! Stable partition algorithms for **Rust**, dispatched at compile time
//! over pluggable execution backends.
//!
//! ## What is partitioning?
//!
//! Partitioning reorders a sequence so that every element satisfying a
//! predicate precedes every element that does not. It is the coarsest
//! useful reordering: cheaper than sorting, and often all an application
//! needs (split valid from invalid records, hot from cold entries, matches
//! from non-matches). The *stable* variants additionally preserve the
//! relative order inside both groups.
//!
//! Algorithms here are registered per backend tag. The sequential tag
//! [`Seq`](prelude::Seq) ships with this crate; accelerated tags plug in
//! from extension crates by implementing the same traits, and every call
//! resolves to the chosen tag's code at compile time.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use cleave::prelude::*;
//!
//! let mut values = vec![1, 2, 3, 4, 5, 6];
//!
//! // Build the partitioner
//! let partitioner = Cleave::new().backend(Seq).build()?;
//!
//! // Move even values to the front, preserving order in both groups
//! let report = partitioner.stable_partition(&mut values, |v| v % 2 == 0)?;
//!
//! assert_eq!(values, [2, 4, 6, 1, 3, 5]);
//! assert_eq!(report.boundary, 3);
//! # Result::<(), CleaveError>::Ok(())
//! ```
//!
//! ### Copying Split
//!
//! ```rust
//! use cleave::prelude::*;
//!
//! let readings = vec![3, 1, 4, 1, 5, 9, 2, 6];
//!
//! let partitioner = Cleave::new().backend(Seq).build()?;
//!
//! // Leave the source untouched; collect both groups
//! let split = partitioner.stable_partition_copy(&readings, |r| *r >= 4)?;
//!
//! assert_eq!(split.matched, [4, 5, 9, 6]);
//! assert_eq!(split.unmatched, [3, 1, 1, 2]);
//! println!("{}", split);
//! # Result::<(), CleaveError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Elements:  8
//!   Matched:   4
//!   Unmatched: 4
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, CleaveError>`; the `?` operator
//! is idiomatic. Query operations can verify their preconditions when
//! asked to:
//!
//! ```rust
//! use cleave::prelude::*;
//!
//! let partitioner = Cleave::new()
//!     .check_preconditions(true)
//!     .backend(Seq)
//!     .build()?;
//!
//! // [1, 2, 3, 4] is not partitioned by "is odd"
//! match partitioner.partition_point(&[1, 2, 3, 4], |v| v % 2 == 1) {
//!     Ok(point) => println!("boundary at {}", point),
//!     Err(e) => eprintln!("query rejected: {}", e),
//! }
//! # Result::<(), CleaveError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency; a global allocator is still
//! required for scratch space and owned results:
//!
//! ```toml
//! [dependencies]
//! cleave = { version = "0.1", default-features = false }
//! ```
//!
//! ## Portable Error Conditions
//!
//! Alongside the partition API, the prelude exposes an errno-style
//! subsystem ([`ErrorCondition`](prelude::ErrorCondition),
//! [`Errc`](prelude::Errc), [`generic_category`](prelude::generic_category))
//! for applications that exchange platform-independent failure codes.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared types and basic utilities.
mod primitives;

// Layer 2: Algorithms - dispatchable primitives and the partition family.
mod algorithms;

// Layer 3: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for partition operations.
mod api;

// Standard partition prelude.
pub mod prelude {
    pub use crate::api::{
        Backend, CleaveBuilder as Cleave, CleaveError, Count, Errc, ErrorCategory, ErrorCondition,
        ErrorConditionEnum, Ordered, Partition, Partitioned, PartitionedCopy, Partitioner,
        RemoveCopy, Search, Seq, generic_category, make_error_condition,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
