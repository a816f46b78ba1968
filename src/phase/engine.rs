//! Puzzle engine orchestration
//!
//! The `PuzzleEngine` owns a session's sequence and phase. Every mutator
//! checks its gate, applies a pure transformation to the sequence, and then
//! synchronously re-evaluates the phase before returning, so no caller can
//! observe a mutated sequence that has not been evaluated.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, trace};

use crate::config::schema::Action;
use crate::error::Rejection;
use crate::observability::events::{Event, EventEmitter};
use crate::observability::metrics;
use crate::sequence::{Sequence, Token};

use super::arrangement::{self, AdvanceEffect};
use super::gate::{self, Capabilities};
use super::state::{Phase, PhaseTransition};

/// Result of a mutator: the transition it caused, if any.
pub type ActionResult = Result<Option<PhaseTransition>, Rejection>;

/// Single-session puzzle state machine.
pub struct PuzzleEngine {
    /// Current arrangement
    sequence: Sequence,
    /// Current phase
    phase: Phase,
    /// Structured event sink
    events: Arc<EventEmitter>,
    /// Mutations that were accepted
    applied: u64,
    /// Mutations that were refused
    rejected: u64,
}

impl PuzzleEngine {
    /// Creates an engine at phase 0 holding `Quadrillion`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_events(Arc::new(EventEmitter::noop()))
    }

    /// Creates an engine that reports to the given event emitter.
    #[must_use]
    pub fn with_events(events: Arc<EventEmitter>) -> Self {
        metrics::set_current_phase(Phase::INITIAL);
        Self {
            sequence: Sequence::seeded(),
            phase: Phase::INITIAL,
            events,
            applied: 0,
            rejected: 0,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current arrangement.
    #[must_use]
    pub const fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Returns the current tokens in display order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        self.sequence.tokens()
    }

    /// Returns both interaction gates for the current phase.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        Capabilities::for_phase(self.phase)
    }

    /// Whether clicking a cell erases it right now.
    #[must_use]
    pub const fn can_erase(&self) -> bool {
        gate::can_erase(self.phase)
    }

    /// Whether cells can be dragged right now.
    #[must_use]
    pub const fn can_drag(&self) -> bool {
        gate::can_drag(self.phase)
    }

    /// Returns `true` once the terminal phase has been reached.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Number of accepted mutations so far.
    #[must_use]
    pub const fn applied_count(&self) -> u64 {
        self.applied
    }

    /// Number of refused mutations so far.
    #[must_use]
    pub const fn rejected_count(&self) -> u64 {
        self.rejected
    }

    /// Returns the event emitter this engine reports to.
    #[must_use]
    pub fn events(&self) -> &Arc<EventEmitter> {
        &self.events
    }

    /// Erases the cell at `index`, then re-evaluates the phase.
    ///
    /// Erasing an already erased cell is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if erasing is not permitted in the current
    /// phase or `index` is out of range. The state is unchanged in both cases.
    pub fn erase_at(&mut self, index: usize) -> ActionResult {
        let phase = self.phase;
        if !gate::can_erase(phase) {
            return Err(self.reject(Rejection::EraseNotPermitted { phase }, &Action::erase(index)));
        }

        let Some(next) = self.sequence.erased_at(index) else {
            let len = self.sequence.len();
            return Err(self.reject(
                Rejection::IndexOutOfRange { index, len },
                &Action::erase(index),
            ));
        };

        self.sequence = next;
        self.applied += 1;
        metrics::record_action("erase");
        debug!(index, %phase, sequence = %self.sequence, "cell erased");
        self.events.emit(Event::TokenErased {
            timestamp: Utc::now(),
            phase,
            index,
            arrangement: self.sequence.to_string(),
        });

        Ok(self.evaluate())
    }

    /// Moves the token at `from` to `to`, shifting the cells in between,
    /// then re-evaluates the phase.
    ///
    /// Moving a token onto its own position is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if reordering is not permitted in the current
    /// phase or either index is out of range. The state is unchanged in both
    /// cases.
    pub fn move_to(&mut self, from: usize, to: usize) -> ActionResult {
        let phase = self.phase;
        if !gate::can_drag(phase) {
            return Err(self.reject(
                Rejection::ReorderNotPermitted { phase },
                &Action::reorder(from, to),
            ));
        }

        let len = self.sequence.len();
        let Some(next) = self.sequence.moved(from, to) else {
            let index = if from >= len { from } else { to };
            return Err(self.reject(
                Rejection::IndexOutOfRange { index, len },
                &Action::reorder(from, to),
            ));
        };

        if from == to {
            debug!(from, %phase, "reorder onto same position ignored");
            return Ok(None);
        }

        self.sequence = next;
        self.applied += 1;
        metrics::record_action("move");
        debug!(from, to, %phase, sequence = %self.sequence, "token moved");
        self.events.emit(Event::TokensReordered {
            timestamp: Utc::now(),
            phase,
            from,
            to,
            arrangement: self.sequence.to_string(),
        });

        Ok(self.evaluate())
    }

    /// Dispatches a scripted action to the matching mutator.
    ///
    /// # Errors
    ///
    /// Propagates the mutator's [`Rejection`].
    pub fn apply(&mut self, action: &Action) -> ActionResult {
        match *action {
            Action::Erase { erase } => self.erase_at(erase),
            Action::Move { target } => self.move_to(target.from, target.to),
        }
    }

    /// Surface intake for a click on cell `index`.
    ///
    /// Rejections are logged and otherwise ignored.
    pub fn on_token_click(&mut self, index: usize) -> Option<PhaseTransition> {
        self.erase_at(index).ok().flatten()
    }

    /// Surface intake for a completed drag from `from` to `to`.
    ///
    /// Rejections are logged and otherwise ignored.
    pub fn on_reorder(&mut self, from: usize, to: usize) -> Option<PhaseTransition> {
        self.move_to(from, to).ok().flatten()
    }

    /// Compares the sequence with the current phase's row and advances on
    /// an exact match.
    fn evaluate(&mut self) -> Option<PhaseTransition> {
        let from = self.phase;
        let rule = arrangement::rule(from)?;
        let to = arrangement::evaluate(self.sequence.tokens(), from);
        trace!(phase = %from, sequence = %self.sequence, advanced = (to != from), "evaluated arrangement");
        if to == from {
            return None;
        }

        let matched = self.sequence.clone();
        let replaced_with = match rule.on_advance {
            AdvanceEffect::None => None,
            AdvanceEffect::Replace(word) => {
                let replacement = Sequence::from_word(word);
                self.sequence = replacement.clone();
                Some(replacement)
            }
        };
        self.phase = to;

        let transition = PhaseTransition {
            from_phase: from,
            to_phase: to,
            matched,
            replaced_with,
            before: Capabilities::for_phase(from),
            after: Capabilities::for_phase(to),
        };

        info!(
            from = %from,
            to = %to,
            can_erase = transition.after.erase,
            can_drag = transition.after.drag,
            "phase transition"
        );
        metrics::record_phase_transition(from, to);

        let now = Utc::now();
        self.events.emit(Event::PhaseEntered {
            timestamp: now,
            phase_index: to,
            can_erase: transition.after.erase,
            can_drag: transition.after.drag,
            arrangement: self.sequence.to_string(),
        });
        if to.is_terminal() {
            info!(actions = self.applied, "puzzle solved");
            self.events.emit(Event::PuzzleSolved {
                timestamp: now,
                actions: self.applied,
                rejected: self.rejected,
            });
        }

        Some(transition)
    }

    /// Records a refused mutation and hands the rejection back.
    fn reject(&mut self, rejection: Rejection, action: &Action) -> Rejection {
        self.rejected += 1;
        debug!(%action, phase = %self.phase, reason = %rejection, "action rejected");
        metrics::record_rejection(&rejection);
        self.events.emit(Event::ActionRejected {
            timestamp: Utc::now(),
            phase: self.phase,
            action: action.to_string(),
            reason: rejection.label().to_string(),
        });
        rejection
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PuzzleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleEngine")
            .field("phase", &self.phase)
            .field("sequence", &self.sequence.to_string())
            .field("applied", &self.applied)
            .field("rejected", &self.rejected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    fn pattern(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn erase_all(engine: &mut PuzzleEngine, indices: &[usize]) -> Option<PhaseTransition> {
        let mut last = None;
        for &i in indices {
            if let Some(t) = engine.erase_at(i).unwrap() {
                last = Some(t);
            }
        }
        last
    }

    /// Shared in-memory writer for capturing emitted events.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn lines(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    #[test]
    fn test_new_engine() {
        let engine = PuzzleEngine::new();
        assert_eq!(engine.phase(), Phase::INITIAL);
        assert_eq!(engine.sequence().to_string(), "Quadrillion");
        assert!(engine.can_erase());
        assert!(!engine.can_drag());
        assert!(!engine.is_solved());
    }

    #[test]
    fn test_first_phase_unlocks_drag() {
        let mut engine = PuzzleEngine::new();
        let transition = erase_all(&mut engine, &[0, 2, 5, 6, 8, 10]).unwrap();

        assert_eq!(transition.from_phase, Phase::INITIAL);
        assert_eq!(transition.to_phase.value(), 1);
        assert!(transition.unlocked_reorder());
        assert_eq!(transition.matched, pattern(". u . d r . . l . o ."));
        assert!(transition.replaced_with.is_none());
        assert!(engine.can_drag());
        assert!(!engine.can_erase());
    }

    #[test]
    fn test_partial_erasure_stays_in_phase() {
        let mut engine = PuzzleEngine::new();
        assert!(erase_all(&mut engine, &[0, 2, 5]).is_none());
        assert_eq!(engine.phase(), Phase::INITIAL);
        assert_eq!(engine.sequence().erased_count(), 3);
    }

    #[test]
    fn test_over_erasure_never_advances() {
        let mut engine = PuzzleEngine::new();
        // erasing 'u' as well overshoots the phase 0 row
        assert!(erase_all(&mut engine, &[1, 0, 2, 5, 6, 8, 10]).is_none());
        assert_eq!(engine.phase(), Phase::INITIAL);
    }

    #[test]
    fn test_move_rejected_before_unlock() {
        let mut engine = PuzzleEngine::new();
        let err = engine.move_to(4, 5).unwrap_err();
        assert_eq!(
            err,
            Rejection::ReorderNotPermitted {
                phase: Phase::INITIAL
            }
        );
        assert_eq!(engine.sequence().to_string(), "Quadrillion");
        assert_eq!(engine.rejected_count(), 1);
        assert_eq!(engine.applied_count(), 0);
    }

    #[test]
    fn test_erase_rejected_while_reordering() {
        let mut engine = PuzzleEngine::new();
        erase_all(&mut engine, &[0, 2, 5, 6, 8, 10]);
        let before = engine.sequence().clone();
        let err = engine.erase_at(1).unwrap_err();
        assert!(matches!(err, Rejection::EraseNotPermitted { .. }));
        assert_eq!(engine.sequence(), &before);
    }

    #[test]
    fn test_out_of_range_erase() {
        let mut engine = PuzzleEngine::new();
        let err = engine.erase_at(11).unwrap_err();
        assert_eq!(err, Rejection::IndexOutOfRange { index: 11, len: 11 });
        assert_eq!(engine.sequence().to_string(), "Quadrillion");
    }

    #[test]
    fn test_out_of_range_move_reports_bad_index() {
        let mut engine = PuzzleEngine::new();
        erase_all(&mut engine, &[0, 2, 5, 6, 8, 10]);
        assert_eq!(
            engine.move_to(2, 40).unwrap_err(),
            Rejection::IndexOutOfRange { index: 40, len: 11 }
        );
        assert_eq!(
            engine.move_to(30, 1).unwrap_err(),
            Rejection::IndexOutOfRange { index: 30, len: 11 }
        );
    }

    #[test]
    fn test_move_onto_self_is_noop() {
        let mut engine = PuzzleEngine::new();
        erase_all(&mut engine, &[0, 2, 5, 6, 8, 10]);
        let before = engine.sequence().clone();
        let applied = engine.applied_count();
        assert_eq!(engine.move_to(3, 3), Ok(None));
        assert_eq!(engine.sequence(), &before);
        assert_eq!(engine.applied_count(), applied);
    }

    #[test]
    fn test_single_move_solves_phase_one() {
        let mut engine = PuzzleEngine::new();
        erase_all(&mut engine, &[0, 2, 5, 6, 8, 10]);
        let transition = engine.move_to(4, 5).unwrap().unwrap();
        assert_eq!(transition.to_phase.value(), 2);
        assert_eq!(engine.sequence(), &pattern(". u . d . r . l . o ."));
        // still draggable in phase 2
        assert!(engine.can_drag());
    }

    #[test]
    fn test_intake_swallows_rejections() {
        let mut engine = PuzzleEngine::new();
        assert!(engine.on_reorder(0, 1).is_none());
        assert!(engine.on_token_click(99).is_none());
        assert_eq!(engine.sequence().to_string(), "Quadrillion");
        assert_eq!(engine.rejected_count(), 2);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut engine = PuzzleEngine::new();
        engine.apply(&Action::erase(0)).unwrap();
        assert_eq!(engine.sequence().get(0), Some(Token::Erased));
        assert!(engine.apply(&Action::reorder(0, 1)).is_err());
    }

    #[test]
    fn test_events_emitted_for_actions_and_transition() {
        let sink = Captured::default();
        let emitter = Arc::new(EventEmitter::new(Box::new(sink.clone())));
        let mut engine = PuzzleEngine::with_events(emitter);

        engine.move_to(0, 1).unwrap_err();
        erase_all(&mut engine, &[0, 2, 5, 6, 8, 10]);

        let events = sink.lines();
        let types: Vec<&str> = events
            .iter()
            .map(|e| e["type"].as_str().unwrap())
            .collect();
        assert_eq!(types[0], "ActionRejected");
        assert_eq!(types.iter().filter(|t| **t == "TokenErased").count(), 6);
        assert_eq!(*types.last().unwrap(), "PhaseEntered");

        let entered = events.last().unwrap();
        assert_eq!(entered["phase_index"], 1);
        assert_eq!(entered["can_drag"], true);
        assert_eq!(entered["arrangement"], "·u·dr··l·o·");

        let seqs: Vec<u64> = events
            .iter()
            .map(|e| e["sequence"].as_u64().unwrap())
            .collect();
        assert!(seqs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_debug_output() {
        let engine = PuzzleEngine::new();
        let debug = format!("{engine:?}");
        assert!(debug.contains("PuzzleEngine"));
        assert!(debug.contains("Quadrillion"));
    }
}
