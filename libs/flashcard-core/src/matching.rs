//! Answer checking for quiz rounds.

use crate::store::CardStore;
use crate::types::Card;
use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to the asked card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    /// The answer is the definition of a different card.
    BelongsTo { expected: String, term: String },
    Wrong { expected: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Console text for this verdict.
    pub fn message(&self) -> String {
        match self {
            Self::Correct => "Correct!".to_string(),
            Self::BelongsTo { expected, term } => format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, term
            ),
            Self::Wrong { expected } => format!("Wrong. The right answer is \"{}\".", expected),
        }
    }
}

/// Compare `typed` against the definition of `asked`. Matching is exact.
pub fn check_answer(store: &CardStore, asked: &Card, typed: &str) -> Verdict {
    if typed == asked.definition {
        return Verdict::Correct;
    }

    match store.find_by_definition(typed) {
        Some(other) => Verdict::BelongsTo {
            expected: asked.definition.clone(),
            term: other.term.clone(),
        },
        None => Verdict::Wrong {
            expected: asked.definition.clone(),
        },
    }
}
