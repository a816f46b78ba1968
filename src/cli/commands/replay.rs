//! Scripted sessions.
//!
//! Loads a YAML action script, feeds every action through a fresh engine
//! in order, and reports where the puzzle ended up.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::cli::args::{OutputFormat, ReplayArgs};
use crate::config::{Action, ScriptLoader};
use crate::error::QuadrillionError;
use crate::observability::Event;
use crate::phase::{ActionResult, Phase, PuzzleEngine};
use crate::surface::{English, Strings, Surface, TerminalSurface, View};

/// Outcome of a replayed script.
#[derive(Debug, Serialize)]
pub struct ReplaySummary {
    /// Script name, if the script declared one
    pub name: Option<String>,
    /// Phase after the last action
    pub phase: Phase,
    /// Final arrangement
    pub sequence: String,
    /// Whether the terminal phase was reached
    pub solved: bool,
    /// Actions the engine accepted
    pub applied: u64,
    /// Actions the engine refused
    pub rejected: u64,
}

/// Feeds `actions` through `engine` in order, tracing each to stderr
/// when `trace` is set.
///
/// Refused actions are counted and skipped; they never abort the replay.
pub fn replay(engine: &mut PuzzleEngine, actions: &[Action], trace: bool) {
    for (step, action) in actions.iter().enumerate() {
        let outcome = engine.apply(action);
        if trace {
            eprintln!("{:>4}  {:<12} {}", step + 1, action.to_string(), describe(&outcome));
        }
    }
}

/// Loads and replays a script, then prints the final state.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded or fails validation,
/// if the session sinks cannot be set up, or if JSON output fails.
pub fn run(args: &ReplayArgs, styled: bool) -> Result<(), QuadrillionError> {
    let loaded = ScriptLoader::with_defaults().load(&args.script)?;
    let script = loaded.script;

    let events = super::session_events(&args.session)?;
    let mut engine = PuzzleEngine::with_events(Arc::clone(&events));
    events.emit(Event::SessionStarted {
        timestamp: Utc::now(),
        surface: "script".to_string(),
        arrangement: engine.sequence().to_string(),
    });
    tracing::info!(
        script = %args.script.display(),
        actions = script.actions.len(),
        "replaying script"
    );

    replay(&mut engine, &script.actions, args.trace);

    let summary = ReplaySummary {
        name: script.name,
        phase: engine.phase(),
        sequence: engine.sequence().to_string(),
        solved: engine.is_solved(),
        applied: engine.applied_count(),
        rejected: engine.rejected_count(),
    };
    events.emit(Event::SessionEnded {
        timestamp: Utc::now(),
        phase: summary.phase,
        reason: (if summary.solved { "solved" } else { "script_exhausted" }).to_string(),
    });

    match args.format {
        OutputFormat::Human => {
            let view = View::of(&engine);
            println!("{}\n", TerminalSurface::new(styled).render(&view));
            println!("{}", English.prompt(&view));
            println!(
                "applied {} action(s), {} refused",
                summary.applied, summary.rejected
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn describe(outcome: &ActionResult) -> String {
    match outcome {
        Ok(Some(transition)) => format!(
            "ok, phase {} -> {}",
            transition.from_phase, transition.to_phase
        ),
        Ok(None) => "ok".to_string(),
        Err(rejection) => format!("refused: {rejection}"),
    }
}
