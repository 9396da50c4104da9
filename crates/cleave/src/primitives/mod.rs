//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! shared types used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Execution backend tags.
pub mod backend;

/// Scratch buffer management.
pub mod buffer;

/// Portable error conditions and categories.
pub mod condition;

/// Shared error types.
pub mod errors;
