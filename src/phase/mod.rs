//! Phase state machine
//!
//! Drives the puzzle through eight expected arrangements. A phase advances
//! only when the sequence equals its row exactly, one step at a time, and
//! the erase and reorder affordances are pure functions of the phase.
//!
//! # Architecture
//!
//! - [`Phase`]: Phase value (`0..=8`) and the [`PhaseTransition`] record
//! - [`arrangement`]: Declarative transition table and `evaluate`
//! - [`gate`]: Interaction gate (`can_erase`, `can_drag`)
//! - [`PuzzleEngine`]: Orchestrator (mutate, evaluate, transition)
//! - [`solver`]: Canonical solution derived from the table

pub mod arrangement;
pub mod engine;
pub mod gate;
pub mod solver;
pub mod state;

pub use arrangement::{MatchResult, evaluate};
pub use engine::{ActionResult, PuzzleEngine};
pub use gate::{Capabilities, can_drag, can_erase};
pub use state::{Phase, PhaseTransition};
