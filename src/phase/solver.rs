//! Canonical solution derived from the arrangement table.
//!
//! Nothing here is hand-written per phase: each phase's plan is computed
//! from the current sequence, the row it must reach, and the gates, then
//! applied to a scratch engine before moving on to the next phase.

use crate::config::schema::Action;
use crate::sequence::{Sequence, Token};

use super::arrangement;
use super::engine::PuzzleEngine;
use super::gate;
use super::state::Phase;

/// Actions that take `current` to the row for `phase`.
///
/// In erase phases every cell that must become erased is erased, left to
/// right. In drag phases the first mismatching position is repeatedly
/// filled from the nearest later cell holding the expected token. Returns
/// an empty plan for the terminal phase or when no plan exists under the
/// phase's gates.
#[must_use]
pub fn plan_phase(current: &Sequence, phase: Phase) -> Vec<Action> {
    let Some(target) = arrangement::expected(phase) else {
        return Vec::new();
    };
    if current.len() != target.len() {
        return Vec::new();
    }

    if gate::can_erase(phase) {
        plan_erasures(current.tokens(), target)
    } else if gate::can_drag(phase) {
        plan_moves(current, target)
    } else {
        Vec::new()
    }
}

fn plan_erasures(current: &[Token], target: &[Token]) -> Vec<Action> {
    let reachable = current
        .iter()
        .zip(target)
        .all(|(have, want)| have == want || want.is_erased());
    if !reachable {
        return Vec::new();
    }

    current
        .iter()
        .zip(target)
        .enumerate()
        .filter(|(_, (have, want))| want.is_erased() && !have.is_erased())
        .map(|(i, _)| Action::erase(i))
        .collect()
}

fn plan_moves(current: &Sequence, target: &[Token]) -> Vec<Action> {
    let mut working = current.clone();
    let mut plan = Vec::new();

    for i in 0..target.len() {
        if working.get(i) == Some(target[i]) {
            continue;
        }
        let Some(j) = (i + 1..working.len()).find(|&j| working.get(j) == Some(target[i])) else {
            // the multiset differs; reordering alone cannot get there
            return Vec::new();
        };
        let Some(next) = working.moved(j, i) else {
            return Vec::new();
        };
        working = next;
        plan.push(Action::reorder(j, i));
    }

    plan
}

/// Full action list that takes a fresh session from phase 0 to phase 8.
///
/// Returns `None` if some phase has no plan; with the shipped table a
/// solution always exists.
#[must_use]
pub fn solution() -> Option<Vec<Action>> {
    let mut engine = PuzzleEngine::new();
    let mut actions = Vec::new();

    while !engine.is_solved() {
        let phase = engine.phase();
        let plan = plan_phase(engine.sequence(), phase);
        if plan.is_empty() {
            return None;
        }
        for action in plan {
            engine.apply(&action).ok()?;
            actions.push(action);
        }
        if engine.phase() == phase {
            return None;
        }
    }

    Some(actions)
}
