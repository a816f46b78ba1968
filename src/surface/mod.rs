//! Render and interaction surfaces
//!
//! The engine exposes its tokens, the gates, and two intake events; a
//! surface draws the tokens and turns user input into those events.

pub mod input;
pub mod strings;
pub mod terminal;
pub mod view;

pub use input::{Command, parse_command};
pub use strings::{English, Strings};
pub use terminal::{Surface, TerminalSurface};
pub use view::{TokenView, View};
