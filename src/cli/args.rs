//! CLI argument definitions
//!
//! All Clap derive structs for `quadrillion` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Erase and reorder the letters of "Quadrillion" until the door opens.
#[derive(Parser, Debug)]
#[command(name = "quadrillion", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging; command output on stdout is unaffected.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "QUADRILLION_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "QUADRILLION_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively in the terminal.
    Play(PlayArgs),

    /// Apply an action script and report the outcome.
    Replay(ReplayArgs),

    /// Print the canonical solution.
    Solve(SolveArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version and build information.
    Version(VersionArgs),
}

// ============================================================================
// Session Options
// ============================================================================

/// Options shared by commands that run a puzzle session.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Write structured session events (JSONL) to this file.
    #[arg(long, env = "QUADRILLION_EVENTS")]
    pub events: Option<PathBuf>,

    /// Serve Prometheus metrics on 127.0.0.1:<port>.
    #[arg(long, env = "QUADRILLION_METRICS_PORT")]
    pub metrics_port: Option<u16>,
}

/// Arguments for `play`.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Session options.
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for `replay`.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Path to a YAML action script.
    pub script: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Print each action and its outcome to stderr.
    #[arg(long)]
    pub trace: bool,

    /// Session options.
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for `solve`.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Output format.
    #[arg(short, long, default_value = "yaml")]
    pub format: SolutionFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Output format for `solve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SolutionFormat {
    /// A replayable YAML action script.
    #[default]
    Yaml,
    /// Numbered human-readable steps.
    Human,
    /// JSON action script.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_parses() {
        let cli = Cli::try_parse_from(["quadrillion", "play"]);
        assert!(cli.is_ok(), "Failed to parse: {cli:?}");
    }

    #[test]
    fn test_replay_requires_script() {
        assert!(Cli::try_parse_from(["quadrillion", "replay"]).is_err());
        let cli = Cli::try_parse_from(["quadrillion", "replay", "s.yaml"]).unwrap();
        let Commands::Replay(args) = cli.command else {
            panic!("Expected ReplayArgs");
        };
        assert_eq!(args.script, PathBuf::from("s.yaml"));
        assert_eq!(args.format, OutputFormat::Human);
        assert!(!args.trace);
    }

    #[test]
    fn test_session_flags() {
        let cli = Cli::try_parse_from([
            "quadrillion",
            "play",
            "--events",
            "out.jsonl",
            "--metrics-port",
            "9100",
        ])
        .unwrap();
        let Commands::Play(args) = cli.command else {
            panic!("Expected PlayArgs");
        };
        assert_eq!(args.session.events, Some(PathBuf::from("out.jsonl")));
        assert_eq!(args.session.metrics_port, Some(9100));
    }

    #[test]
    fn test_solve_default_format() {
        let cli = Cli::try_parse_from(["quadrillion", "solve"]).unwrap();
        let Commands::Solve(args) = cli.command else {
            panic!("Expected SolveArgs");
        };
        assert_eq!(args.format, SolutionFormat::Yaml);
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["quadrillion", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["quadrillion", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["quadrillion", "--color", variant, "solve"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["quadrillion", "-vvv", "solve"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_log_format_parse() {
        let cli = Cli::try_parse_from(["quadrillion", "--log-format", "json", "solve"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
