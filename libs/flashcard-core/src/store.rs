//! In-memory card store.

use crate::error::{Result, StoreError};
use crate::parser::{parse_line, serialize_line};
use crate::types::{Card, HardestCards, ImportReport};

/// Where an upserted card ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Replaced,
    Appended,
}

/// Ordered collection of cards.
///
/// Terms are unique and so are definitions. Insertion order is preserved;
/// replacing a card during import keeps its position.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Card at `index` modulo the store size, so quiz rounds wrap around.
    pub fn cycle_index(&self, index: usize) -> Option<&Card> {
        if self.cards.is_empty() {
            return None;
        }
        self.cards.get(index % self.cards.len())
    }

    /// Add a new card with no mistakes.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<()> {
        if self.find_by_term(term).is_some() {
            return Err(StoreError::DuplicateTerm(term.to_string()));
        }
        if self.find_by_definition(definition).is_some() {
            return Err(StoreError::DuplicateDefinition(definition.to_string()));
        }
        self.cards.push(Card::new(term, definition));
        Ok(())
    }

    /// Remove the card with this term.
    pub fn remove(&mut self, term: &str) -> Result<Card> {
        let index = self
            .position(term)
            .ok_or_else(|| StoreError::CardNotFound(term.to_string()))?;
        Ok(self.cards.remove(index))
    }

    pub fn find_by_term(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.term == term)
    }

    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.definition == definition)
    }

    /// Bump the mistake counter of `term`. Unknown terms are ignored.
    pub fn record_mistake(&mut self, term: &str) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.term == term) {
            card.mistakes = card.mistakes.saturating_add(1);
        }
    }

    pub fn reset_all_mistakes(&mut self) {
        for card in &mut self.cards {
            card.mistakes = 0;
        }
    }

    /// Cards sharing the highest non-zero mistake count.
    pub fn hardest(&self) -> HardestCards {
        let max = self.cards.iter().map(|c| c.mistakes).max().unwrap_or(0);
        if max == 0 {
            return HardestCards::NoErrors;
        }

        let mut terms: Vec<String> = self
            .cards
            .iter()
            .filter(|c| c.mistakes == max)
            .map(|c| c.term.clone())
            .collect();

        if terms.len() == 1 {
            HardestCards::Single {
                term: terms.remove(0),
                mistakes: max,
            }
        } else {
            HardestCards::Tied {
                terms,
                mistakes: max,
            }
        }
    }

    /// Merge a card in: replace it in place when the term exists, else append.
    ///
    /// A definition already owned by a different term is rejected.
    pub fn upsert(&mut self, card: Card) -> Result<Upsert> {
        let existing = self.position(&card.term);
        let clash = self
            .cards
            .iter()
            .enumerate()
            .any(|(idx, c)| c.definition == card.definition && Some(idx) != existing);
        if clash {
            return Err(StoreError::DuplicateDefinition(card.definition));
        }

        match existing {
            Some(index) => {
                self.cards[index] = card;
                Ok(Upsert::Replaced)
            }
            None => {
                self.cards.push(card);
                Ok(Upsert::Appended)
            }
        }
    }

    /// Merge the contents of a card file. One line holds at most one card;
    /// lines that do not parse are skipped but still counted.
    pub fn import_str(&mut self, content: &str) -> ImportReport {
        let mut report = ImportReport::default();

        for line in content.lines() {
            report.lines_read += 1;
            let Ok(card) = parse_line(line) else {
                continue;
            };
            report.cards_parsed += 1;
            match self.upsert(card) {
                Ok(Upsert::Replaced) => report.cards_replaced += 1,
                Ok(Upsert::Appended) => {}
                Err(_) => report.cards_rejected += 1,
            }
        }

        report
    }

    /// Card file contents: one line per card, no trailing newline.
    pub fn export_string(&self) -> String {
        self.cards
            .iter()
            .map(serialize_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.term == term)
    }
}
