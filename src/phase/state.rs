//! Phase value and transition record.

use serde::Serialize;

use crate::sequence::Sequence;

use super::gate::Capabilities;

/// Checkpoint in the puzzle's linear progression, `0..=8`.
///
/// Phases `0..=7` each have an expected arrangement; phase 8 is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Phase(u8);

impl Phase {
    /// Phase every session starts in.
    pub const INITIAL: Self = Self(0);

    /// Final phase; nothing advances out of it.
    pub const TERMINAL: Self = Self(8);

    /// Number of distinct phases, terminal included.
    pub const COUNT: usize = Self::TERMINAL.0 as usize + 1;

    /// Creates a phase, or `None` when `value` is past the terminal phase.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::TERMINAL.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw phase number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Phase number as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for the terminal phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.0 == Self::TERMINAL.0
    }

    /// The following phase, or `None` from the terminal phase.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// All phases in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::INITIAL.0..=Self::TERMINAL.0).map(Self)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record of a phase transition for downstream processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseTransition {
    /// Phase we transitioned from
    pub from_phase: Phase,
    /// Phase we transitioned to
    pub to_phase: Phase,
    /// Arrangement that matched the expected row
    pub matched: Sequence,
    /// Replacement arrangement installed on entry, if any
    pub replaced_with: Option<Sequence>,
    /// Affordances before the transition
    pub before: Capabilities,
    /// Affordances after the transition
    pub after: Capabilities,
}

impl PhaseTransition {
    /// Returns `true` if reordering became available with this transition.
    #[must_use]
    pub const fn unlocked_reorder(&self) -> bool {
        !self.before.drag && self.after.drag
    }

    /// Returns `true` if reordering stopped being available.
    #[must_use]
    pub const fn locked_reorder(&self) -> bool {
        self.before.drag && !self.after.drag
    }
}
