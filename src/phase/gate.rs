//! Interaction gate
//!
//! Which mutations the player may perform, derived purely from the phase.
//! Nothing here is stored: the surface asks again after every transition.

use serde::Serialize;

use super::state::Phase;

/// Returns `true` if clicking a cell may erase it in `phase`.
///
/// Erasing is the required action in phase 0 and in phases 3 through 7.
#[must_use]
pub const fn can_erase(phase: Phase) -> bool {
    matches!(phase.value(), 0 | 3..=7)
}

/// Returns `true` if cells may be dragged to a new position in `phase`.
///
/// Reordering unlocks when phase 0 is solved and locks again when
/// phase 2 is solved.
#[must_use]
pub const fn can_drag(phase: Phase) -> bool {
    matches!(phase.value(), 1 | 2)
}

/// Snapshot of both gates for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Clicking erases a cell
    pub erase: bool,
    /// Dragging reorders cells
    pub drag: bool,
}

impl Capabilities {
    /// Computes both gates for `phase`.
    #[must_use]
    pub const fn for_phase(phase: Phase) -> Self {
        Self {
            erase: can_erase(phase),
            drag: can_drag(phase),
        }
    }
}
