//! Script loader
//!
//! Loading pipeline:
//! 1. Size check and read
//! 2. YAML parsing into a typed [`Script`]
//! 3. Validation (all issues collected before failing)

use std::path::Path;

use crate::config::schema::Script;
use crate::config::validation::Validator;
use crate::error::{ConfigError, ValidationIssue};

/// Limits applied while loading a script.
#[derive(Debug, Clone)]
pub struct ScriptLimits {
    /// Maximum number of actions in one script.
    pub max_actions: usize,

    /// Maximum cell index an action may reference.
    pub max_index: usize,

    /// Maximum script file size in bytes.
    pub max_script_size: usize,
}

impl Default for ScriptLimits {
    fn default() -> Self {
        Self {
            max_actions: 1024,
            max_index: 63,
            max_script_size: 256 * 1024,
        }
    }
}

/// Successfully loaded script plus any non-fatal findings.
#[derive(Debug)]
pub struct LoadResult {
    /// The validated script
    pub script: Script,
    /// Warnings produced during validation
    pub warnings: Vec<ValidationIssue>,
}

/// Loads and validates action scripts.
#[derive(Debug, Default)]
pub struct ScriptLoader {
    limits: ScriptLimits,
}

impl ScriptLoader {
    /// Creates a loader with the given limits.
    #[must_use]
    pub const fn new(limits: ScriptLimits) -> Self {
        Self { limits }
    }

    /// Creates a loader with default limits.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Loads a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file exceeds the size limit
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > self.limits.max_script_size {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: format!(
                    "script is {size} bytes, limit is {}",
                    self.limits.max_script_size
                ),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: e.to_string(),
        })?;

        self.load_str(&raw, path)
    }

    /// Parses and validates script text; `origin` is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML parsing or validation fails.
    pub fn load_str(&self, raw: &str, origin: &Path) -> Result<LoadResult, ConfigError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        if raw.trim().is_empty() {
            return Err(ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: None,
                message: "script file is empty".to_string(),
            });
        }

        let script: Script = serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: origin.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        let result = Validator::new().validate(&script, &self.limits);
        if result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: origin.display().to_string(),
                errors: result.errors,
            });
        }

        for warning in &result.warnings {
            tracing::warn!(path = %origin.display(), "{warning}");
        }

        Ok(LoadResult {
            script,
            warnings: result.warnings,
        })
    }
}
