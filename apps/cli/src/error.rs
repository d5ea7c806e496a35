//! Error handling for the console session.

use thiserror::Error;

/// Errors that end the interactive loop.
///
/// Per-command failures (duplicates, missing cards, unreadable files) are
/// reported to the user inside the handler and never become a SessionError.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("end of input")]
    EndOfInput,

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
