//! Property tests over arbitrary action streams.

mod common;

use common::engine_at;
use proptest::prelude::*;
use quadrillion::config::Action;
use quadrillion::phase::{Phase, PuzzleEngine, evaluate};
use quadrillion::sequence::{Sequence, Token};

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..13).prop_map(Action::erase),
        (0usize..13, 0usize..13).prop_map(|(from, to)| Action::reorder(from, to)),
    ]
}

fn any_phase() -> impl Strategy<Value = Phase> {
    (0u8..=8).prop_map(|n| Phase::new(n).unwrap())
}

fn sorted(sequence: &Sequence) -> Vec<Token> {
    let mut tokens = sequence.tokens().to_vec();
    tokens.sort();
    tokens
}

proptest! {
    #[test]
    fn phase_never_decreases(actions in prop::collection::vec(action(), 0..64)) {
        let mut engine = PuzzleEngine::new();
        let mut previous = engine.phase();
        for action in &actions {
            let _ = engine.apply(action);
            prop_assert!(engine.phase() >= previous);
            prop_assert!(engine.phase().value() <= previous.value() + 1);
            previous = engine.phase();
        }
    }

    #[test]
    fn length_fixed_until_terminal(actions in prop::collection::vec(action(), 0..64)) {
        let mut engine = PuzzleEngine::new();
        for action in &actions {
            let _ = engine.apply(action);
            if !engine.is_solved() {
                prop_assert_eq!(engine.sequence().len(), 11);
            }
        }
    }

    #[test]
    fn erasing_twice_equals_erasing_once(index in 0usize..11) {
        let once = Sequence::seeded().erased_at(index).unwrap();
        let twice = once.erased_at(index).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn move_onto_self_is_noop(index in 0usize..11, target in 1u8..=2) {
        let mut engine = engine_at(Phase::new(target).unwrap());
        let before = engine.sequence().clone();
        prop_assert_eq!(engine.move_to(index, index), Ok(None));
        prop_assert_eq!(engine.sequence(), &before);
    }

    #[test]
    fn moves_preserve_tokens(from in 0usize..11, to in 0usize..11) {
        let seeded = Sequence::seeded();
        let moved = seeded.moved(from, to).unwrap();
        prop_assert_eq!(moved.len(), seeded.len());
        prop_assert_eq!(sorted(&moved), sorted(&seeded));
        prop_assert_eq!(moved.get(to), seeded.get(from));
    }

    #[test]
    fn refused_actions_leave_state_untouched(
        actions in prop::collection::vec(action(), 0..32),
        probe in action(),
    ) {
        let mut engine = PuzzleEngine::new();
        for action in &actions {
            let _ = engine.apply(action);
        }
        let sequence = engine.sequence().clone();
        let phase = engine.phase();
        if engine.apply(&probe).is_err() {
            prop_assert_eq!(engine.sequence(), &sequence);
            prop_assert_eq!(engine.phase(), phase);
        }
    }

    #[test]
    fn non_matching_sequences_hold_phase(
        cells in prop::collection::vec(prop_oneof![Just('.'), Just('u'), Just('d'), Just('r')], 11),
        phase in any_phase(),
    ) {
        let sequence: Sequence = cells.iter().collect::<String>().parse().unwrap();
        let next = evaluate(sequence.tokens(), phase);
        let matched = quadrillion::phase::arrangement::expected(phase)
            .is_some_and(|row| row == sequence.tokens());
        if matched {
            prop_assert_eq!(next.value(), phase.value() + 1);
        } else {
            prop_assert_eq!(next, phase);
        }
    }
}
