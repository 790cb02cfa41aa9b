//! Error types for the store module.

use atomspace_core::{AtomType, CoreError, Handle};
use thiserror::Error;

/// Errors that can occur during atom table operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// Handle does not name a live atom.
    #[error("invalid handle: {0:?}")]
    InvalidHandle(Handle),

    /// Node operation on a link type or the other way around.
    #[error("type mismatch: {atom_type} is not a {expected} type")]
    TypeMismatch {
        atom_type: AtomType,
        expected: &'static str,
    },

    /// Core value error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
