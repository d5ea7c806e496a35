//! Core types for the flashcard store.

use serde::{Deserialize, Serialize};

/// A term/definition pair with its mistake counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub mistakes: u32,
}

impl Card {
    /// Create a card with no recorded mistakes.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    /// Create a card with an existing mistake count.
    pub fn with_mistakes(
        term: impl Into<String>,
        definition: impl Into<String>,
        mistakes: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }
}

/// Outcome of the hardest-card query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardestCards {
    /// Store is empty or nobody has missed a card yet.
    NoErrors,
    Single { term: String, mistakes: u32 },
    /// Terms appear in store order.
    Tied { terms: Vec<String>, mistakes: u32 },
}

impl HardestCards {
    /// Console text for this report.
    pub fn message(&self) -> String {
        match self {
            Self::NoErrors => "There are no cards with errors.".to_string(),
            Self::Single { term, mistakes } => format!(
                "The hardest card is \"{}\". You have {} errors answering it.",
                term, mistakes
            ),
            Self::Tied { terms, mistakes } => format!(
                "The hardest cards are \"{}\". You have {} errors answering them.",
                terms.join("\", \""),
                mistakes
            ),
        }
    }
}

/// Summary of merging a card file into the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Every line of the file, including ones that failed to parse.
    pub lines_read: usize,
    pub cards_parsed: usize,
    /// Parsed cards that overwrote an existing card with the same term.
    pub cards_replaced: usize,
    /// Parsed cards refused because their definition belongs to another term.
    pub cards_rejected: usize,
}

impl ImportReport {
    /// Cards that actually landed in the store.
    pub fn cards_merged(&self) -> usize {
        self.cards_parsed.saturating_sub(self.cards_rejected)
    }
}
