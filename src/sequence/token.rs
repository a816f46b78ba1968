//! Single character cells of the puzzle word.

use serde::{Serialize, Serializer};

/// Glyph shown for a cleared cell (U+00B7 MIDDLE DOT).
pub const ERASED_GLYPH: char = '·';

/// One cell of the arrangement.
///
/// `Erased` is a reserved marker, distinct from every character cell,
/// so a word containing a literal middle dot still compares correctly.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Token {
    /// A visible character
    Char(char),
    /// A cleared cell
    Erased,
}

impl Token {
    /// Returns `true` for the erased marker.
    #[must_use]
    pub const fn is_erased(self) -> bool {
        matches!(self, Self::Erased)
    }

    /// Glyph rendered for this token.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Char(c) => c,
            Self::Erased => ERASED_GLYPH,
        }
    }

    /// Parses one pattern character; `.` and `·` both denote the erased marker.
    #[must_use]
    pub const fn from_pattern_char(c: char) -> Self {
        match c {
            '.' | ERASED_GLYPH => Self::Erased,
            other => Self::Char(other),
        }
    }
}

impl From<char> for Token {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erased_glyph_is_middle_dot() {
        assert_eq!(Token::Erased.glyph(), '\u{00B7}');
        assert_eq!(Token::Erased.to_string(), "·");
    }

    #[test]
    fn char_token_renders_itself() {
        assert_eq!(Token::Char('Q').glyph(), 'Q');
        assert!(!Token::Char('Q').is_erased());
        assert!(Token::Erased.is_erased());
    }

    #[test]
    fn pattern_chars() {
        assert_eq!(Token::from_pattern_char('.'), Token::Erased);
        assert_eq!(Token::from_pattern_char('·'), Token::Erased);
        assert_eq!(Token::from_pattern_char('u'), Token::Char('u'));
    }

    #[test]
    fn serializes_as_glyph() {
        let json = serde_json::to_string(&[Token::Char('u'), Token::Erased]).unwrap();
        assert_eq!(json, r#"["u","·"]"#);
    }
}
