//! Error types for the AtomSpace Core.

use thiserror::Error;

/// Errors raised while constructing core values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid truth value: strength {strength} must be in [0, 1], count {count} must be >= 0")]
    InvalidTruthValue { strength: f32, count: f32 },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
