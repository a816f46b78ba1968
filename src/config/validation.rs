//! Script validation
//!
//! Runs on the deserialized [`Script`] and collects every issue rather
//! than stopping at the first one.

use crate::config::loader::ScriptLimits;
use crate::config::schema::{Action, Script};
use crate::error::{Severity, ValidationIssue};

/// Result of script validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Script validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a script against the given limits.
    pub fn validate(&mut self, script: &Script, limits: &ScriptLimits) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        if script.actions.is_empty() {
            self.error("actions", "script has no actions");
        }

        if script.actions.len() > limits.max_actions {
            self.error(
                "actions",
                format!(
                    "script has {} actions, limit is {}",
                    script.actions.len(),
                    limits.max_actions
                ),
            );
        }

        if script.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            self.warning("name", "name is empty");
        }

        for (i, action) in script.actions.iter().enumerate() {
            self.validate_action(i, action, limits);
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn validate_action(&mut self, i: usize, action: &Action, limits: &ScriptLimits) {
        match *action {
            Action::Erase { erase } => {
                self.check_index(&format!("actions[{i}].erase"), erase, limits);
            }
            Action::Move { target } => {
                self.check_index(&format!("actions[{i}].move.from"), target.from, limits);
                self.check_index(&format!("actions[{i}].move.to"), target.to, limits);
                if target.from == target.to {
                    self.warning(
                        format!("actions[{i}].move"),
                        "moving a token onto itself has no effect",
                    );
                }
            }
        }
    }

    fn check_index(&mut self, path: &str, index: usize, limits: &ScriptLimits) {
        if index > limits.max_index {
            self.error(
                path,
                format!("index {index} exceeds limit {}", limits.max_index),
            );
        }
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        });
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        });
    }
}
