//! Action script configuration
//!
//! YAML scripts describing a sequence of puzzle actions, with loading
//! and validation.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{LoadResult, ScriptLimits, ScriptLoader};
pub use schema::{Action, MoveTarget, Script};
