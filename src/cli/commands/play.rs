//! Interactive terminal session.
//!
//! Each stdin line is one discrete event: it is parsed, applied, and
//! evaluated before the next line is read.

use std::io::Write;
use std::sync::Arc;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::args::PlayArgs;
use crate::error::QuadrillionError;
use crate::observability::Event;
use crate::phase::{PhaseTransition, PuzzleEngine, solver};
use crate::surface::input::HELP;
use crate::surface::{Command, English, Strings, Surface, TerminalSurface, View, parse_command};

/// Runs the interactive loop until the puzzle is solved, stdin closes,
/// the player quits, or Ctrl-C is pressed.
///
/// # Errors
///
/// Returns an error if the session sinks cannot be set up or stdin
/// cannot be read.
pub async fn run(args: &PlayArgs, styled: bool) -> Result<(), QuadrillionError> {
    let events = super::session_events(&args.session)?;
    let mut engine = PuzzleEngine::with_events(Arc::clone(&events));
    let surface = TerminalSurface::new(styled);
    let strings = English;

    events.emit(Event::SessionStarted {
        timestamp: Utc::now(),
        surface: "terminal".to_string(),
        arrangement: engine.sequence().to_string(),
    });
    tracing::info!(phase = %engine.phase(), "session started");

    println!("{}\n", strings.title());
    draw(&surface, &strings, &engine);
    for line in strings.taglines() {
        println!("{line}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let reason = loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => break "interrupted",
        };
        let Some(line) = line else {
            break "eof";
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Click(index) => announce(engine.on_token_click(index).as_ref()),
            Command::Reorder { from, to } => announce(engine.on_reorder(from, to).as_ref()),
            Command::Show => {}
            Command::Hint => {
                match solver::plan_phase(engine.sequence(), engine.phase()).first() {
                    Some(action) => println!("try: {action}"),
                    None => println!("no hint from here"),
                }
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break "quit",
        }

        draw(&surface, &strings, &engine);
        if engine.is_solved() {
            break "solved";
        }
    };

    events.emit(Event::SessionEnded {
        timestamp: Utc::now(),
        phase: engine.phase(),
        reason: reason.to_string(),
    });
    tracing::info!(
        phase = %engine.phase(),
        applied = engine.applied_count(),
        rejected = engine.rejected_count(),
        reason,
        "session ended"
    );
    Ok(())
}

/// Prints the line that goes with a change of affordance. Refused
/// clicks and drags reach here as `None` and leave no trace on screen.
fn announce(transition: Option<&PhaseTransition>) {
    if let Some(note) = transition.and_then(transition_note) {
        println!("{note}");
    }
}

const fn transition_note(transition: &PhaseTransition) -> Option<&'static str> {
    if transition.unlocked_reorder() {
        Some("The letters come loose.")
    } else if transition.locked_reorder() {
        Some("The letters settle into place.")
    } else {
        None
    }
}

fn draw(surface: &impl Surface, strings: &impl Strings, engine: &PuzzleEngine) {
    let view = View::of(engine);
    println!("\n{}\n", surface.render(&view));
    println!("{}", strings.prompt(&view));
}
