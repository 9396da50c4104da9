//! Execution backend tags and the dispatch contract.
//!
//! ## Purpose
//!
//! This module defines the `Backend` marker trait implemented by zero-sized
//! backend tags. A tag names an execution strategy (sequential, multi-core,
//! ...); every algorithm in the crate is expressed as a trait whose methods
//! are resolved against one tag, picked once at build time.
//!
//! ## Design notes
//!
//! * **Registration**: implementing an algorithm trait for a tag registers
//!   that tag for the algorithm. An empty `impl` block inherits the trait's
//!   default method bodies.
//! * **Specialization**: overriding a method replaces the default body for
//!   that tag only. More specific tags may forward to a parent tag's methods
//!   explicitly (see `fastCleave`, where small inputs are handed to [`Seq`]).
//! * **Fallback**: the default bodies are the portable implementations and
//!   always apply; a registered tag can never lack an algorithm at runtime.
//! * **Static resolution**: dispatch is monomorphized. Selecting a backend
//!   costs nothing per call, and a call never switches backends midway.
//! * **Missing registrations fail the build**: using a tag that does not
//!   implement a required algorithm trait is a compile error, not a runtime
//!   condition.
//!
//! ## Key concepts
//!
//! * **Tag**: a zero-sized `Copy` type implementing [`Backend`].
//! * **Single-tag calls**: each call site resolves through exactly one tag
//!   type parameter, so mixing backends within one call cannot be expressed.
//!
//! ## Invariants
//!
//! * Tags carry no state; two values of the same tag type are interchangeable.
//! * `NAME` is unique per tag and stable across releases (used in diagnostics
//!   and benchmark output).
//!
//! ## Non-goals
//!
//! * This module does not define the algorithms themselves (see the
//!   algorithms layer).
//! * This module does not provide runtime backend selection.

// External dependencies
use core::fmt::Debug;

// ============================================================================
// Backend Trait
// ============================================================================

/// Marker trait for execution backend tags.
///
/// Implementors are zero-sized types passed by value at API boundaries and
/// resolved statically everywhere else.
pub trait Backend:
    Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Short identifier for diagnostics and benchmark labels.
    const NAME: &'static str;
}

// ============================================================================
// Sequential Tag
// ============================================================================

/// Sequential execution backend tag.
///
/// `Seq` is the reference backend: it registers every algorithm with the
/// portable default bodies and adds no specialization. Other backends
/// delegate to it for inputs too small to be worth distributing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Seq;

impl Backend for Seq {
    const NAME: &'static str = "seq";
}
