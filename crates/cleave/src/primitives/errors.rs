//! Error types for partition operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running partition operations, including builder misuse, undersized output
//! destinations, and scratch-space exhaustion.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., needed vs. actual capacities).
//! * **Deferred**: Builder errors are caught during configuration and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Resource errors**: Scratch-space acquisition can fail before anything is written.
//! 2. **Capacity errors**: Validated copy destinations must hold their share of the input.
//! 3. **Configuration errors**: Each builder parameter may be set at most once.
//! 4. **Precondition errors**: Opt-in checks report inputs that violate an operation's contract.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for partition operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleaveError {
    /// Scratch space for the given number of elements could not be reserved.
    AllocationFailed {
        /// Number of elements the operation tried to reserve.
        elements: usize,
    },

    /// A validated output destination cannot hold its share of the input.
    OutputTooSmall {
        /// Which destination is undersized ("matched" or "unmatched").
        region: &'static str,
        /// Number of elements the destination must hold.
        needed: usize,
        /// Capacity the destination actually provides.
        got: usize,
    },

    /// An opt-in precondition check found an input violating the operation's contract.
    PreconditionViolated {
        /// Name of the operation whose contract was violated.
        operation: &'static str,
        /// The requirement that did not hold.
        requirement: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CleaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AllocationFailed { elements } => {
                write!(f, "Failed to reserve scratch space for {elements} elements")
            }
            Self::OutputTooSmall {
                region,
                needed,
                got,
            } => {
                write!(
                    f,
                    "Output '{region}' is too small: got capacity {got}, need {needed}"
                )
            }
            Self::PreconditionViolated {
                operation,
                requirement,
            } => {
                write!(f, "Precondition violated in '{operation}': {requirement}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CleaveError {}
