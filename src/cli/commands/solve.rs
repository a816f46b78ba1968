//! Canonical solution output.

use crate::cli::args::{SolutionFormat, SolveArgs};
use crate::config::Script;
use crate::error::QuadrillionError;
use crate::phase::solver;

/// Name given to the emitted script.
const SOLUTION_NAME: &str = "canonical solution";

/// Prints the canonical solution in the requested format.
///
/// The YAML and JSON forms are valid input for `replay`.
///
/// # Errors
///
/// Returns an error if no solution exists or serialization fails.
pub fn run(args: &SolveArgs) -> Result<(), QuadrillionError> {
    print!("{}", render(args.format)?);
    Ok(())
}

/// Renders the canonical solution as text.
///
/// # Errors
///
/// Returns an error if no solution exists or serialization fails.
pub fn render(format: SolutionFormat) -> Result<String, QuadrillionError> {
    let actions = solver::solution().ok_or(QuadrillionError::Unsolvable)?;
    let mut script = Script::new(actions);
    script.name = Some(SOLUTION_NAME.to_string());

    Ok(match format {
        SolutionFormat::Yaml => serde_yaml::to_string(&script)?,
        SolutionFormat::Json => serde_json::to_string_pretty(&script)? + "\n",
        SolutionFormat::Human => script
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("{:>3}. {action}\n", i + 1))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScriptLoader;
    use std::path::Path;

    #[test]
    fn yaml_output_loads_back() {
        let yaml = render(SolutionFormat::Yaml).unwrap();
        let loaded = ScriptLoader::with_defaults()
            .load_str(&yaml, Path::new("solution.yaml"))
            .unwrap();
        assert_eq!(loaded.script.name.as_deref(), Some(SOLUTION_NAME));
        assert_eq!(loaded.script.actions, solver::solution().unwrap());
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn human_output_is_numbered() {
        let text = render(SolutionFormat::Human).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("  1. erase 0"));
        assert!(text.lines().any(|l| l.ends_with("move 5 4")));
    }

    #[test]
    fn json_output_has_actions() {
        let json: serde_json::Value =
            serde_json::from_str(&render(SolutionFormat::Json).unwrap()).unwrap();
        assert_eq!(json["actions"][0]["erase"], 0);
    }
}
