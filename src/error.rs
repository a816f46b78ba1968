//! Error types for `Quadrillion`
//!
//! Rejections raised by the puzzle mutators, script configuration errors,
//! terminal input errors, and the top-level error with its exit code mapping.

use std::path::PathBuf;
use thiserror::Error;

use crate::phase::Phase;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `quadrillion` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, malformed input)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `Quadrillion` operations.
///
/// Rejected puzzle actions are deliberately absent: they are no-ops,
/// never failures of the process.
#[derive(Debug, Error)]
pub enum QuadrillionError {
    /// Script loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed terminal input
    #[error(transparent)]
    Input(#[from] InputError),

    /// Metrics recorder could not be installed
    #[error("metrics error: {0}")]
    Metrics(String),

    /// The arrangement table admits no solution from the seed word
    #[error("no solution reaches the final phase")]
    Unsolvable,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl QuadrillionError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Input(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Metrics(_) | Self::Unsolvable => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Action Rejections
// ============================================================================

/// Reason a mutator refused to touch the sequence.
///
/// Every rejection leaves the sequence and phase exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Erasing is not allowed in the current phase
    #[error("erasing is not permitted in phase {phase}")]
    EraseNotPermitted {
        /// Phase at the time of the attempt
        phase: Phase,
    },

    /// Reordering is not allowed in the current phase
    #[error("reordering is not permitted in phase {phase}")]
    ReorderNotPermitted {
        /// Phase at the time of the attempt
        phase: Phase,
    },

    /// Index does not address a cell of the sequence
    #[error("index {index} is out of range for a sequence of {len} tokens")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Sequence length
        len: usize,
    },
}

impl Rejection {
    /// Short stable label used for metrics and structured events.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EraseNotPermitted { .. } => "erase_not_permitted",
            Self::ReorderNotPermitted { .. } => "reorder_not_permitted",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
        }
    }
}

// ============================================================================
// Sequence Parsing Errors
// ============================================================================

/// Failure to parse a whitespace-separated token pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSequenceError {
    /// A pattern item was longer than one character
    #[error("token '{item}' at position {position} is not a single character")]
    NotSingleChar {
        /// The offending item
        item: String,
        /// Zero-based position in the pattern
        position: usize,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Action script loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the script file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Script validation failed
    #[error("validation failed for {path}: {}", join_issues(.errors))]
    ValidationError {
        /// Path to the script file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced script file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during script validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "actions[2].move.to")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Validation failure that prevents the script from being used
    Error,
    /// Potential issue that does not prevent loading
    Warning,
}

// ============================================================================
// Input Errors
// ============================================================================

/// Errors raised while parsing a line typed at the terminal surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Line could not be split (unbalanced quotes)
    #[error("could not parse input: {0}")]
    Malformed(String),

    /// Verb is not a known command
    #[error("unknown command '{verb}'{}", suggestion_suffix(.suggestion.as_deref()))]
    UnknownCommand {
        /// What was typed
        verb: String,
        /// Closest known command, if any is close enough
        suggestion: Option<String>,
    },

    /// Command is missing a required argument
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// Human description of the expected arguments
        expected: &'static str,
    },

    /// Argument is not a valid position
    #[error("'{value}' is not a valid position")]
    InvalidIndex {
        /// Offending argument
        value: String,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn suggestion_suffix(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(", did you mean '{s}'?"))
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `Quadrillion` operations.
pub type Result<T> = std::result::Result<T, QuadrillionError>;

// ============================================================================
// Tests
// ============================================================================
