//! Sequence store
//!
//! The ordered arrangement of cells the player manipulates. Both mutators
//! are pure: they leave `self` untouched and hand back a complete new
//! sequence, or `None` when an index does not address a cell.

pub mod token;

use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseSequenceError;

pub use token::{ERASED_GLYPH, Token};

/// Word every session starts from.
pub const SEED_WORD: &str = "Quadrillion";

/// Word that replaces the arrangement once the puzzle is solved.
pub const CONGRATS_WORD: &str = "Congrats!";

/// Ordered, rendered left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Token>);

impl Sequence {
    /// Splits `word` into one character token per `char`.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        Self(word.chars().map(Token::Char).collect())
    }

    /// The initial arrangement, `Quadrillion`.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_word(SEED_WORD)
    }

    /// The terminal arrangement, `Congrats!`.
    #[must_use]
    pub fn congratulations() -> Self {
        Self::from_word(CONGRATS_WORD)
    }

    /// Returns the tokens in display order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Token> {
        self.0.get(index).copied()
    }

    /// Number of erased cells.
    #[must_use]
    pub fn erased_count(&self) -> usize {
        self.0.iter().filter(|t| t.is_erased()).count()
    }

    /// Returns a copy with the cell at `index` replaced by the erased marker.
    ///
    /// Erasing an erased cell yields an identical sequence.
    #[must_use]
    pub fn erased_at(&self, index: usize) -> Option<Self> {
        if index >= self.0.len() {
            return None;
        }
        let mut next = self.0.clone();
        next[index] = Token::Erased;
        Some(Self(next))
    }

    /// Returns a copy with the token at `from` removed and reinserted at `to`,
    /// shifting the cells in between by one.
    #[must_use]
    pub fn moved(&self, from: usize, to: usize) -> Option<Self> {
        let len = self.0.len();
        if from >= len || to >= len {
            return None;
        }
        let mut next = self.0.clone();
        let token = next.remove(from);
        next.insert(to, token);
        Some(Self(next))
    }
}

impl From<Vec<Token>> for Sequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl PartialEq<[Token]> for Sequence {
    fn eq(&self, other: &[Token]) -> bool {
        self.0.as_slice() == other
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.0 {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Parses a pattern such as `". u . d r . . l . o ."`.
///
/// Items are whitespace separated and each must be one character; `.` and
/// `·` denote the erased marker. A pattern without whitespace is read one
/// character per cell.
impl FromStr for Sequence {
    type Err = ParseSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.contains(char::is_whitespace) {
            return Ok(Self(trimmed.chars().map(Token::from_pattern_char).collect()));
        }

        trimmed
            .split_whitespace()
            .enumerate()
            .map(|(position, item)| {
                let mut chars = item.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Token::from_pattern_char(c)),
                    _ => Err(ParseSequenceError::NotSingleChar {
                        item: item.to_string(),
                        position,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_quadrillion() {
        let seq = Sequence::seeded();
        assert_eq!(seq.len(), 11);
        assert_eq!(seq.to_string(), "Quadrillion");
        assert_eq!(seq.erased_count(), 0);
    }

    #[test]
    fn congratulations_has_nine_tokens() {
        let seq = Sequence::congratulations();
        assert_eq!(seq.len(), 9);
        assert_eq!(seq.get(8), Some(Token::Char('!')));
    }

    #[test]
    fn erase_replaces_without_removing() {
        let seq = Sequence::seeded();
        let next = seq.erased_at(0).unwrap();
        assert_eq!(next.len(), seq.len());
        assert_eq!(next.to_string(), "·uadrillion");
        // source untouched
        assert_eq!(seq.to_string(), "Quadrillion");
    }

    #[test]
    fn erase_is_idempotent() {
        let once = Sequence::seeded().erased_at(3).unwrap();
        let twice = once.erased_at(3).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn erase_out_of_range() {
        assert!(Sequence::seeded().erased_at(11).is_none());
    }

    #[test]
    fn move_forward_shifts_intervening_cells() {
        let seq: Sequence = "abcde".parse().unwrap();
        assert_eq!(seq.moved(1, 3).unwrap().to_string(), "acdbe");
    }

    #[test]
    fn move_backward_shifts_intervening_cells() {
        let seq: Sequence = "abcde".parse().unwrap();
        assert_eq!(seq.moved(4, 0).unwrap().to_string(), "eabcd");
    }

    #[test]
    fn move_to_same_index_is_identity() {
        let seq = Sequence::seeded();
        assert_eq!(seq.moved(5, 5).unwrap(), seq);
    }

    #[test]
    fn move_out_of_range() {
        let seq = Sequence::seeded();
        assert!(seq.moved(11, 0).is_none());
        assert!(seq.moved(0, 11).is_none());
    }

    #[test]
    fn parse_spaced_pattern() {
        let seq: Sequence = ". u . d r . . l . o .".parse().unwrap();
        assert_eq!(seq.len(), 11);
        assert_eq!(seq.get(1), Some(Token::Char('u')));
        assert_eq!(seq.get(0), Some(Token::Erased));
        assert_eq!(seq.to_string(), "·u·dr··l·o·");
    }

    #[test]
    fn parse_rejects_multi_char_items() {
        let err = ". uu .".parse::<Sequence>().unwrap_err();
        assert_eq!(
            err,
            ParseSequenceError::NotSingleChar {
                item: "uu".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn serializes_as_glyph_array() {
        let seq: Sequence = ". u".parse().unwrap();
        assert_eq!(serde_json::to_string(&seq).unwrap(), r#"["·","u"]"#);
    }
}
