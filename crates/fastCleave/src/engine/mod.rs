//! Layer 2: Engine
//!
//! This layer registers the parallel backend tag with the partition
//! primitives, distributing per-element work across CPU cores.

// Parallel primitive registrations using CPU threads
pub mod parallel;
