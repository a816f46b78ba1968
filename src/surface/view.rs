//! Render projection of engine state.

use serde::Serialize;

use crate::phase::{Phase, PuzzleEngine};
use crate::sequence::Token;

/// One cell as the surface sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenView {
    /// Position in the arrangement
    pub index: usize,
    /// Glyph to draw
    pub glyph: char,
    /// Whether the cell has been cleared
    pub erased: bool,
    /// Whether a drag handle should be attached
    pub draggable: bool,
}

/// Everything a surface needs to draw the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Current phase
    pub phase: Phase,
    /// Cells, left to right
    pub tokens: Vec<TokenView>,
    /// Clicking erases
    pub can_erase: bool,
    /// Dragging reorders
    pub can_drag: bool,
    /// Terminal phase reached
    pub solved: bool,
}

impl View {
    /// Projects the engine's current state.
    #[must_use]
    pub fn of(engine: &PuzzleEngine) -> Self {
        let caps = engine.capabilities();
        let tokens = engine
            .tokens()
            .iter()
            .enumerate()
            .map(|(index, token)| TokenView {
                index,
                glyph: token.glyph(),
                erased: matches!(token, Token::Erased),
                draggable: caps.drag,
            })
            .collect();

        Self {
            phase: engine.phase(),
            tokens,
            can_erase: caps.erase,
            can_drag: caps.drag,
            solved: engine.is_solved(),
        }
    }

    /// The arrangement as a plain string.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.glyph).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view() {
        let view = View::of(&PuzzleEngine::new());
        assert_eq!(view.text(), "Quadrillion");
        assert_eq!(view.tokens.len(), 11);
        assert!(view.can_erase);
        assert!(!view.can_drag);
        assert!(view.tokens.iter().all(|t| !t.draggable && !t.erased));
    }

    #[test]
    fn draggable_follows_phase() {
        let mut engine = PuzzleEngine::new();
        for i in [0, 2, 5, 6, 8, 10] {
            engine.erase_at(i).unwrap();
        }
        let view = View::of(&engine);
        assert!(view.can_drag);
        assert!(view.tokens.iter().all(|t| t.draggable));
        assert!(view.tokens[0].erased);
        assert_eq!(view.tokens[0].glyph, '·');
        assert!(!view.tokens[1].erased);
    }

    #[test]
    fn serializes_to_json() {
        let view = View::of(&PuzzleEngine::new());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["phase"], 0);
        assert_eq!(json["tokens"][0]["glyph"], "Q");
        assert_eq!(json["can_drag"], false);
    }
}
