//! Error types for toolsmith-clone.

use thiserror::Error;

use crate::reflect::Slot;

/// Result type alias for deep-copy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while cloning an object graph.
///
/// Every failure is reported to the caller of the clone that triggered it.
/// The engine never substitutes a default value for a node it could not copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The shallow structural duplicate of a value could not be produced.
    #[error("Cannot construct a duplicate of {type_name}: {reason}")]
    ConstructionFailure {
        /// Concrete type that could not be duplicated
        type_name: &'static str,
        /// What prevented the duplicate
        reason: String,
    },

    /// A shared handle was reached again while it was still being cloned.
    #[error("Cyclic object graph detected at {type_name}")]
    CyclicGraphDetected {
        /// Type of the handle that closed the cycle
        type_name: &'static str,
    },

    /// The graph is deeper than the configured traversal limit.
    #[error("Object graph exceeds the maximum clone depth of {limit}")]
    DepthLimitExceeded {
        /// Configured maximum depth
        limit: usize,
    },

    /// A slot was requested that the value does not have.
    #[error("{type_name} has no slot {slot}")]
    UnknownSlot {
        /// Type that was asked for the slot
        type_name: &'static str,
        /// Rendered slot address
        slot: String,
    },

    /// A cloned value could not be stored back because its type differs.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type the slot holds
        expected: &'static str,
        /// Type that was offered
        found: &'static str,
    },
}

impl Error {
    /// Creates an unknown-slot error for `slot` of `type_name`.
    pub fn unknown_slot(type_name: &'static str, slot: Slot<'_>) -> Self {
        Error::UnknownSlot {
            type_name,
            slot: slot.to_string(),
        }
    }

    /// Creates a construction failure for `type_name`.
    pub fn construction<S: Into<String>>(type_name: &'static str, reason: S) -> Self {
        Error::ConstructionFailure {
            type_name,
            reason: reason.into(),
        }
    }

    /// Returns whether the error stems from the shape of the input graph
    /// rather than from a type's duplication capability.
    ///
    /// Cycles and excessive depth violate the caller's acyclic, finite-depth
    /// precondition; the other variants describe a type that cannot take
    /// part in cloning.
    pub fn is_precondition_violation(&self) -> bool {
        match self {
            Error::CyclicGraphDetected { .. } => true,
            Error::DepthLimitExceeded { .. } => true,
            Error::ConstructionFailure { .. } => false,
            Error::UnknownSlot { .. } => false,
            Error::TypeMismatch { .. } => false,
        }
    }
}
