//! Error types for pointer parsing, navigation, and mutation.

use thiserror::Error;

use crate::types::Location;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    // ── Syntax ────────────────────────────────────────────────────────────
    #[error("invalid pointer {pointer:?}: must be empty or start with '/'")]
    InvalidPointerFormat { pointer: String },
    #[error("invalid array index {0}")]
    InvalidIndex(Location),
    #[error("negative array index {0}")]
    NegativeIndex(Location),

    // ── Navigation ────────────────────────────────────────────────────────
    #[error("path not found {0}")]
    PathNotFound(Location),
    #[error("index {index} out of bounds (len: {len}) {location}")]
    IndexOutOfBounds {
        location: Location,
        /// The parsed index. Digit strings too large for `usize` saturate to
        /// `usize::MAX`; `location.segment` keeps the text as written.
        index: usize,
        len: usize,
    },
    #[error("cannot navigate into a primitive value {0}")]
    PrimitiveNavigation(Location),
    #[error("\"-\" does not address an existing element {0}")]
    AppendNotNavigable(Location),

    // ── Mutation ──────────────────────────────────────────────────────────
    #[error("cannot set a child of a primitive value {0}")]
    CannotSetOnPrimitive(Location),
    #[error("cannot remove the document root (pointer {pointer:?})")]
    CannotRemoveRoot { pointer: String },
    #[error("\"-\" does not address an element to remove {0}")]
    AppendNotRemovable(Location),
    #[error("cannot remove a child of a primitive value {0}")]
    PrimitiveRemove(Location),

    // ── Path relationships ────────────────────────────────────────────────
    #[error("root path has no parent")]
    NoParent,
}

impl PointerError {
    /// The failing step, for errors raised while walking a path.
    pub fn location(&self) -> Option<&Location> {
        match self {
            PointerError::InvalidIndex(loc)
            | PointerError::NegativeIndex(loc)
            | PointerError::PathNotFound(loc)
            | PointerError::PrimitiveNavigation(loc)
            | PointerError::AppendNotNavigable(loc)
            | PointerError::CannotSetOnPrimitive(loc)
            | PointerError::AppendNotRemovable(loc)
            | PointerError::PrimitiveRemove(loc) => Some(loc),
            PointerError::IndexOutOfBounds { location, .. } => Some(location),
            PointerError::InvalidPointerFormat { .. }
            | PointerError::CannotRemoveRoot { .. }
            | PointerError::NoParent => None,
        }
    }

    /// The pointer string the failing call was given.
    pub fn pointer(&self) -> Option<&str> {
        match self {
            PointerError::InvalidPointerFormat { pointer }
            | PointerError::CannotRemoveRoot { pointer } => Some(pointer.as_str()),
            other => other.location().map(|loc| loc.pointer.as_str()),
        }
    }
}

/// Why a path step is not an array index.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("negative array index")]
    Negative,
    #[error("invalid array index")]
    Invalid,
}

impl IndexError {
    /// Attach the failing location.
    pub fn at(self, location: Location) -> PointerError {
        match self {
            IndexError::Negative => PointerError::NegativeIndex(location),
            IndexError::Invalid => PointerError::InvalidIndex(location),
        }
    }
}
