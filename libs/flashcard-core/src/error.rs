//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by card store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate term: {0}")]
    DuplicateTerm(String),

    #[error("duplicate definition: {0}")]
    DuplicateDefinition(String),

    #[error("card not found: {0}")]
    CardNotFound(String),
}

/// Errors that can occur when parsing a card file line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line does not start with a mistake count")]
    MissingMistakes,

    #[error("mistake count out of range: {0}")]
    InvalidMistakes(String),

    #[error("missing ':' between term and definition")]
    MissingSeparator,
}
