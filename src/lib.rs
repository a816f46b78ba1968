//! `Quadrillion` - a word puzzle driven by a phase state machine
//!
//! Eleven letter cells start as "Quadrillion". Clicking erases a cell,
//! dragging reorders cells, and each phase only permits one of the two.
//! When the cells match the arrangement expected for the current phase,
//! the puzzle advances; after the eighth arrangement the word becomes
//! "Congrats!".

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod phase;
pub mod sequence;
pub mod surface;
