//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides the execution engine that fronts the algorithm
//! layer: input validation, result assembly, and the executor that binds a
//! backend tag to a checking policy.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Partition executor.
pub mod executor;

/// Output types and result structures.
pub mod output;

/// Input validation.
pub mod validator;
