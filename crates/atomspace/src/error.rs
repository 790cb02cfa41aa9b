//! Error types for AtomSpace views.

use atomspace_store::TableError;
use thiserror::Error;

/// Errors that can occur during AtomSpace operations.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// Operation the view refuses to perform.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// No unused name found within the retry bound.
    #[error("no unused name with prefix {prefix:?} after {attempts} attempts")]
    NameSpaceExhausted { prefix: String, attempts: u32 },

    /// A non-owning view outlived the table it was looking at.
    #[error("atom table has been released by its owning view")]
    TableReleased,

    /// Error from the atom table, passed through unchanged.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type for AtomSpace operations.
pub type Result<T> = std::result::Result<T, SpaceError>;
