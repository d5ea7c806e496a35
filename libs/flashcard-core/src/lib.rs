//! Core flashcard library used by the console application.
//!
//! Provides:
//! - The in-memory card store with term/definition uniqueness
//! - The line-oriented card file format
//! - Answer checking for quiz rounds
//! - Shared types (Card, HardestCards, ImportReport)

pub mod error;
pub mod matching;
pub mod parser;
pub mod store;
pub mod types;

pub use error::{FormatError, Result, StoreError};
pub use matching::{check_answer, Verdict};
pub use parser::{parse_line, serialize_line};
pub use store::{CardStore, Upsert};
pub use types::{Card, HardestCards, ImportReport};
