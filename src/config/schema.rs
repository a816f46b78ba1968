//! Action script schema
//!
//! A script is a YAML document listing puzzle actions in the order they
//! are dispatched:
//!
//! ```yaml
//! name: first phase
//! actions:
//!   - erase: 0
//!   - erase: 2
//!   - move: { from: 4, to: 5 }
//! ```

use serde::{Deserialize, Serialize};

/// A complete action script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Optional human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Actions to dispatch, in order
    pub actions: Vec<Action>,
}

impl Script {
    /// Builds an unnamed script from a list of actions.
    #[must_use]
    pub const fn new(actions: Vec<Action>) -> Self {
        Self {
            name: None,
            actions,
        }
    }
}

/// One discrete player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    /// Click a cell to erase it
    Erase {
        /// Index of the cell
        erase: usize,
    },

    /// Drag a cell to a new position
    Move {
        /// Source and destination positions
        #[serde(rename = "move")]
        target: MoveTarget,
    },
}

impl Action {
    /// Erase the cell at `index`.
    #[must_use]
    pub const fn erase(index: usize) -> Self {
        Self::Erase { erase: index }
    }

    /// Move the token at `from` to `to`.
    #[must_use]
    pub const fn reorder(from: usize, to: usize) -> Self {
        Self::Move {
            target: MoveTarget { from, to },
        }
    }

    /// Stable action kind label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Erase { .. } => "erase",
            Self::Move { .. } => "move",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Erase { erase } => write!(f, "erase {erase}"),
            Self::Move { target } => write!(f, "move {} {}", target.from, target.to),
        }
    }
}

/// Source and destination of a reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveTarget {
    /// Position the token is taken from
    pub from: usize,
    /// Position the token is inserted at
    pub to: usize,
}
