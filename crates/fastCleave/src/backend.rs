//! Parallel execution backend tag.
//!
//! ## Purpose
//!
//! This module defines the tag that selects multi-threaded execution. The
//! tag itself carries no state; its registrations in the engine layer carry
//! the behavior.
//!
//! ## Design notes
//!
//! * **Selective overrides**: the tag overrides the primitives whose work
//!   scales with input length. Everything else falls back to the portable
//!   bodies it inherits.
//! * **Small inputs**: overridden primitives hand inputs below a size
//!   threshold straight to the sequential backend, where thread fan-out
//!   costs more than it saves.
//! * **Feature-gated**: without the `cpu` feature the registrations are
//!   empty and the tag behaves exactly like the sequential one.
//!
//! ## Non-goals
//!
//! * This module does not configure the thread pool; `rayon`'s global pool
//!   conventions apply.

// Export dependencies from cleave crate
use cleave::prelude::Backend;

// ============================================================================
// Backend Tag
// ============================================================================

/// Multi-threaded execution backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Par;

impl Backend for Par {
    const NAME: &'static str = "par";
}
