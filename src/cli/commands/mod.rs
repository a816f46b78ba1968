//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod play;
pub mod replay;
pub mod solve;
pub mod version;

use std::io::IsTerminal;
use std::sync::Arc;

use crate::cli::args::{Cli, ColorChoice, Commands, SessionArgs};
use crate::error::QuadrillionError;
use crate::observability::{EventEmitter, init_metrics};

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), QuadrillionError> {
    let styled = styled_stdout(cli.color);
    match cli.command {
        Commands::Play(args) => play::run(&args, styled).await,
        Commands::Replay(args) => replay::run(&args, styled),
        Commands::Solve(args) => solve::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}

/// Sets up the observability sinks for one puzzle session.
///
/// Installs the Prometheus recorder when a port is given and opens the
/// JSONL event file when one is named; otherwise events are discarded.
///
/// # Errors
///
/// Returns an error if the metrics listener cannot bind or the event
/// file cannot be created.
pub fn session_events(args: &SessionArgs) -> Result<Arc<EventEmitter>, QuadrillionError> {
    if let Some(port) = args.metrics_port {
        init_metrics(Some(port))?;
        tracing::info!(port, "metrics endpoint listening");
    }

    let emitter = match &args.events {
        Some(path) => {
            tracing::debug!(path = %path.display(), "writing session events");
            EventEmitter::from_file(path)?
        }
        None => EventEmitter::noop(),
    };
    Ok(Arc::new(emitter))
}

/// Resolves whether puzzle output on stdout should carry ANSI styling.
fn styled_stdout(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}
