//! Display text provider.

use super::view::View;

/// Supplies every piece of human-facing text a surface shows.
pub trait Strings {
    /// Page title.
    fn title(&self) -> &str;

    /// Lines shown beneath the word.
    fn taglines(&self) -> &[&str];

    /// One-line prompt describing what the player can do right now.
    fn prompt(&self, view: &View) -> String;
}

/// Built-in English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

const TAGLINES: [&str; 2] = [
    "This door is opened only at probability of a quadrillion to one.",
    "You will be blessed only at probability of a quadrillion to one.",
];

impl Strings for English {
    fn title(&self) -> &str {
        "Quadrillion"
    }

    fn taglines(&self) -> &[&str] {
        &TAGLINES
    }

    fn prompt(&self, view: &View) -> String {
        if view.solved {
            return "The door is open.".to_string();
        }
        let action = if view.can_erase {
            "click a cell to erase it (click <n>)"
        } else if view.can_drag {
            "drag a cell to a new position (move <from> <to>)"
        } else {
            "nothing can be changed"
        };
        format!("phase {}: {action}", view.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::PuzzleEngine;

    #[test]
    fn english_text() {
        let strings = English;
        assert_eq!(strings.title(), "Quadrillion");
        assert_eq!(strings.taglines().len(), 2);
        assert!(strings.taglines()[0].starts_with("This door"));
    }

    #[test]
    fn prompt_describes_erasing() {
        let view = View::of(&PuzzleEngine::new());
        let prompt = English.prompt(&view);
        assert!(prompt.starts_with("phase 0"));
        assert!(prompt.contains("erase"));
    }
}
