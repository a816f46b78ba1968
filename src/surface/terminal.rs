//! Terminal rendering of the puzzle.

use console::style;

use super::view::{TokenView, View};

/// Width of one rendered cell, wide enough for a two-digit index.
const CELL_WIDTH: usize = 3;

/// Something that can draw a [`View`].
pub trait Surface {
    /// Renders the view to displayable text.
    fn render(&self, view: &View) -> String;
}

/// Plain terminal surface: the word on one line, indices beneath it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurface {
    styled: bool,
}

impl TerminalSurface {
    /// Creates a surface; `styled` enables ANSI dimming of erased cells.
    #[must_use]
    pub const fn new(styled: bool) -> Self {
        Self { styled }
    }

    fn cell(&self, token: &TokenView) -> String {
        let padded = format!("{:>w$}", token.glyph, w = CELL_WIDTH);
        if !self.styled {
            return padded;
        }
        let styled = style(padded).force_styling(true);
        if token.erased {
            styled.dim().to_string()
        } else if token.draggable {
            styled.bold().cyan().to_string()
        } else {
            styled.bold().to_string()
        }
    }
}

impl Surface for TerminalSurface {
    fn render(&self, view: &View) -> String {
        let word: String = view.tokens.iter().map(|t| self.cell(t)).collect();
        if view.solved {
            return word;
        }
        let ruler: String = view
            .tokens
            .iter()
            .map(|t| format!("{:>w$}", t.index, w = CELL_WIDTH))
            .collect();
        let ruler = if self.styled {
            style(ruler).dim().force_styling(true).to_string()
        } else {
            ruler
        };
        format!("{word}\n{ruler}")
    }
}
