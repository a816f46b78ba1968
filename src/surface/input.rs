//! Terminal input parsing.
//!
//! Each line typed at the terminal is one discrete event. Clicks and
//! completed drags become intake calls on the engine; the rest are
//! surface-only commands.

use crate::error::InputError;

/// A parsed terminal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click on a cell
    Click(usize),
    /// Drag a cell from one position to another
    Reorder {
        /// Source position
        from: usize,
        /// Destination position
        to: usize,
    },
    /// Redraw the puzzle
    Show,
    /// Suggest the next action
    Hint,
    /// List commands
    Help,
    /// End the session
    Quit,
}

/// Canonical verb names, used for suggestions.
const VERBS: [&str; 6] = ["click", "move", "show", "hint", "help", "quit"];

/// Help text listing all commands.
pub const HELP: &str = "\
commands:
  click <n>          click cell n (aliases: erase, c, e)
  move <from> <to>   drag a cell to a new position (aliases: drag, m)
  show               redraw the puzzle
  hint               suggest the next action
  help               show this list
  quit               leave (aliases: exit, q)";

/// Parses one line. Blank lines parse to `None`.
///
/// # Errors
///
/// Returns an [`InputError`] for unbalanced quotes, unknown verbs,
/// missing arguments, or arguments that are not positions.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let words = shlex::split(line).ok_or_else(|| InputError::Malformed(line.to_string()))?;
    let Some((verb, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "click" | "erase" | "c" | "e" => {
            let [index] = args else {
                return Err(InputError::MissingArgument {
                    command: "click",
                    expected: "one position",
                });
            };
            Command::Click(parse_index(index)?)
        }
        "move" | "drag" | "m" => {
            let [from, to] = args else {
                return Err(InputError::MissingArgument {
                    command: "move",
                    expected: "two positions",
                });
            };
            Command::Reorder {
                from: parse_index(from)?,
                to: parse_index(to)?,
            }
        }
        "show" | "s" => Command::Show,
        "hint" => Command::Hint,
        "help" | "?" | "h" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(InputError::UnknownCommand {
                verb: other.to_string(),
                suggestion: suggest_verb(other),
            });
        }
    };

    Ok(Some(command))
}

fn parse_index(value: &str) -> Result<usize, InputError> {
    value.parse().map_err(|_| InputError::InvalidIndex {
        value: value.to_string(),
    })
}

/// Closest known verb within edit distance 2.
#[must_use]
pub fn suggest_verb(input: &str) -> Option<String> {
    VERBS
        .iter()
        .map(|v| (*v, strsim::damerau_levenshtein(input, v)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(verb, _)| verb.to_string())
}
