//! Line format for card files.
//!
//! # Format
//! ```text
//! 0capital:Paris
//! 3sky:blue
//! ```
//!
//! The mistake count runs straight into the term. The first `:` after the
//! term separates it from the definition, which may itself contain colons.
//! Either side may be empty. A term that starts with a digit does not
//! survive a round trip.

use crate::error::FormatError;
use crate::types::Card;

/// Render a card as a single card-file line.
pub fn serialize_line(card: &Card) -> String {
    format!("{}{}:{}", card.mistakes, card.term, card.definition)
}

/// Parse one card-file line.
pub fn parse_line(line: &str) -> Result<Card, FormatError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return Err(FormatError::MissingMistakes);
    }

    let (count, rest) = line.split_at(digits_end);
    let mistakes = count
        .parse::<u32>()
        .map_err(|_| FormatError::InvalidMistakes(count.to_string()))?;

    let (term, definition) = rest.split_once(':').ok_or(FormatError::MissingSeparator)?;

    Ok(Card::with_mistakes(term, definition, mistakes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serialize_puts_count_before_term() {
        let card = Card::with_mistakes("capital", "Paris", 2);
        assert_eq!(serialize_line(&card), "2capital:Paris");
    }

    #[test]
    fn parse_simple_line() {
        let card = parse_line("0capital:Paris").unwrap();
        assert_eq!(card, Card::new("capital", "Paris"));
    }

    #[test]
    fn parse_multi_digit_count() {
        let card = parse_line("12sky:blue").unwrap();
        assert_eq!(card.mistakes, 12);
        assert_eq!(card.term, "sky");
    }

    #[test]
    fn definition_keeps_later_colons() {
        let card = parse_line("1ratio:3:4").unwrap();
        assert_eq!(card.term, "ratio");
        assert_eq!(card.definition, "3:4");
    }

    #[test]
    fn term_may_contain_spaces() {
        let card = parse_line("0New York:city").unwrap();
        assert_eq!(card.term, "New York");
    }

    #[test]
    fn strips_carriage_return() {
        let card = parse_line("0a:b\r").unwrap();
        assert_eq!(card.definition, "b");
    }

    #[test]
    fn reject_missing_count() {
        assert_eq!(parse_line("capital:Paris"), Err(FormatError::MissingMistakes));
    }

    #[test]
    fn reject_overflowing_count() {
        let result = parse_line("99999999999term:def");
        assert!(matches!(result, Err(FormatError::InvalidMistakes(_))));
    }

    #[test]
    fn reject_missing_separator() {
        assert_eq!(parse_line("0capital Paris"), Err(FormatError::MissingSeparator));
    }

    #[test]
    fn parse_empty_term() {
        assert_eq!(parse_line("3:Paris"), Ok(Card::with_mistakes("", "Paris", 3)));
    }

    #[test]
    fn parse_empty_definition() {
        assert_eq!(parse_line("3capital:"), Ok(Card::with_mistakes("capital", "", 3)));
    }

    #[test]
    fn parse_bare_separator() {
        assert_eq!(parse_line("0:"), Ok(Card::new("", "")));
    }

    #[test]
    fn reject_blank_line() {
        assert_eq!(parse_line(""), Err(FormatError::MissingMistakes));
    }

    #[test]
    fn digit_leading_term_is_ambiguous() {
        let card = Card::new("7up", "soda");
        let parsed = parse_line(&serialize_line(&card)).unwrap();
        assert_eq!(parsed.mistakes, 7);
        assert_eq!(parsed.term, "up");
    }
}
