//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the computational core: the dispatchable primitive
//! traits and the partition family composed from them. Backends register
//! here by implementing the traits for their tags.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Filtered copying primitive.
pub mod copying;

/// Predicate counting primitive.
pub mod count;

/// Sortedness primitives.
pub mod ordering;

/// Partition algorithm family.
pub mod partition;

/// Predicate search primitive.
pub mod search;
