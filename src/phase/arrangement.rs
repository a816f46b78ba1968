//! Expected arrangements
//!
//! The transition table: one row per non-terminal phase holding the exact
//! arrangement that advances it, plus what happens on the way out.
//! Evaluation only ever consults the current phase's row, so phases can
//! neither be skipped nor reached out of order.

use crate::sequence::{CONGRATS_WORD, Token};

use super::state::Phase;

/// Cells in every expected arrangement (the length of `Quadrillion`).
pub const ARRANGEMENT_LEN: usize = 11;

const E: Token = Token::Erased;

const fn c(ch: char) -> Token {
    Token::Char(ch)
}

/// Extra work done when a row's arrangement is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceEffect {
    /// Only the phase changes
    None,
    /// The whole sequence is replaced by the given word
    Replace(&'static str),
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRule {
    /// Arrangement that must match element for element
    pub expected: [Token; ARRANGEMENT_LEN],
    /// Effect applied while advancing to the next phase
    pub on_advance: AdvanceEffect,
}

/// Rows for phases 0 through 7, indexed by phase.
pub static RULES: [PhaseRule; Phase::COUNT - 1] = [
    PhaseRule {
        expected: [E, c('u'), E, c('d'), c('r'), E, E, c('l'), E, c('o'), E],
        on_advance: AdvanceEffect::None,
    },
    PhaseRule {
        expected: [E, c('u'), E, c('d'), E, c('r'), E, c('l'), E, c('o'), E],
        on_advance: AdvanceEffect::None,
    },
    PhaseRule {
        expected: [E, c('l'), E, c('o'), E, c('r'), E, c('d'), E, c('u'), E],
        on_advance: AdvanceEffect::None,
    },
    PhaseRule {
        expected: [E, E, E, c('o'), E, c('r'), E, c('d'), E, c('u'), E],
        on_advance: AdvanceEffect::None,
    },
    PhaseRule {
        expected: [E, E, E, E, E, c('r'), E, c('d'), E, c('u'), E],
        on_advance: AdvanceEffect::None,
    },
    PhaseRule {
        expected: [E, E, E, E, E, E, E, c('d'), E, c('u'), E],
        on_advance: AdvanceEffect::None,
    },
    PhaseRule {
        expected: [E, E, E, E, E, E, E, E, E, c('u'), E],
        on_advance: AdvanceEffect::None,
    },
    PhaseRule {
        expected: [E; ARRANGEMENT_LEN],
        on_advance: AdvanceEffect::Replace(CONGRATS_WORD),
    },
];

/// Result of comparing a sequence against a phase's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Every cell matched
    Matched,
    /// At least one cell differs, or the lengths differ
    NotMet,
    /// The phase has no row
    Terminal,
}

/// Returns the row for `phase`, or `None` for the terminal phase.
#[must_use]
pub fn rule(phase: Phase) -> Option<&'static PhaseRule> {
    RULES.get(phase.index())
}

/// Returns the expected arrangement for `phase`.
#[must_use]
pub fn expected(phase: Phase) -> Option<&'static [Token]> {
    rule(phase).map(|r| r.expected.as_slice())
}

/// Compares `sequence` against the row for `phase`.
#[must_use]
pub fn check(sequence: &[Token], phase: Phase) -> MatchResult {
    match expected(phase) {
        None => MatchResult::Terminal,
        Some(row) if row == sequence => MatchResult::Matched,
        Some(_) => MatchResult::NotMet,
    }
}

/// Phase reached after evaluating `sequence` in `phase`.
///
/// Returns the next phase on an exact match and `phase` itself otherwise.
/// The terminal phase always evaluates to itself.
#[must_use]
pub fn evaluate(sequence: &[Token], phase: Phase) -> Phase {
    match check(sequence, phase) {
        MatchResult::Matched => phase.next().unwrap_or(phase),
        MatchResult::NotMet | MatchResult::Terminal => phase,
    }
}
