//! # Fast Cleave — Parallel Stable Partitioning
//!
//! Multi-threaded stable partition algorithms for **Rust**, built on the
//! [`cleave`] core and dispatched at compile time over backend tags.
//!
//! ## What is partitioning?
//!
//! Partitioning reorders a sequence so that every element satisfying a
//! predicate precedes every element that does not, preserving the relative
//! order inside both groups in the *stable* variants. This crate keeps the
//! core crate's algorithms and swaps the primitives they stand on for
//! `rayon`-powered ones, so large inputs use every available CPU core and
//! small inputs fall back to sequential execution automatically.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastCleave::prelude::*;
//!
//! let mut values: Vec<i64> = (0..10_000).rev().collect();
//!
//! // Build the partitioner with the parallel backend
//! let partitioner = Cleave::new().backend(Par).build()?;
//!
//! // Move multiples of three to the front, preserving order in both groups
//! let report = partitioner.stable_partition(&mut values, |v| v % 3 == 0)?;
//!
//! assert_eq!(report.matched_len(), 3334);
//! assert_eq!(report.unmatched_len(), 6666);
//! # Result::<(), CleaveError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! `fastCleave` supports [ndarray](https://docs.rs/ndarray) natively,
//! allowing zero-copy data passing from numerical pipelines.
//!
//! ```rust
//! use fastCleave::prelude::*;
//! use ndarray::Array1;
//!
//! let data = Array1::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//!
//! // One-shot split; the source stays untouched
//! let split = partition_of(&data, Par, |v| *v >= 4)?;
//!
//! assert_eq!(split.matched, [4, 5, 9, 6]);
//! assert_eq!(split.unmatched, [3, 1, 1, 2]);
//! # Result::<(), CleaveError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, CleaveError>`; the `?` operator
//! is idiomatic:
//!
//! ```rust
//! use fastCleave::prelude::*;
//!
//! let readings = vec![0.3_f64, 1.2, 0.7, 2.4, 0.1];
//!
//! let partitioner = Cleave::new().backend(Par).build()?;
//!
//! match partitioner.stable_partition_copy(&readings, |r| *r < 1.0) {
//!     Ok(split) => println!("{} readings in range", split.matched.len()),
//!     Err(e) => eprintln!("partitioning failed: {}", e),
//! }
//! # Result::<(), CleaveError>::Ok(())
//! ```
//!
//! ## Sequential Fallback
//!
//! The core crate's [`Seq`](prelude::Seq) tag remains available through
//! this prelude; building with `default-features = false` removes the
//! `rayon` dependency and makes [`Par`](prelude::Par) behave exactly like
//! [`Seq`](prelude::Seq).
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 1: Backend - the parallel execution tag.
mod backend;

// Layer 2: Engine - parallel primitive registrations.
mod engine;

// Input data handling.
mod input;

// High-level fluent API for partition operations.
mod api;

// Standard fastCleave prelude.
pub mod prelude {
    pub use crate::api::{
        Backend, Cleave, CleaveError, CleaveInput, Count, Errc, ErrorCategory, ErrorCondition,
        ErrorConditionEnum, Ordered, Par, Partition, Partitioned, PartitionedCopy, Partitioner,
        RemoveCopy, Search, Seq, generic_category, make_error_condition, partition_of,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod backend {
        pub use crate::backend::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
