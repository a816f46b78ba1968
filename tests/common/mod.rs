//! Shared integration-test helpers: engines driven to a given phase, and
//! a harness for running the `quadrillion` binary as a child process.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use quadrillion::phase::{Phase, PuzzleEngine, solver};
use quadrillion::sequence::Sequence;

/// Environment variables the binary reads; cleared so the host shell
/// cannot leak into a test.
const ENV_VARS: [&str; 5] = [
    "QUADRILLION_COLOR",
    "QUADRILLION_LOG_FORMAT",
    "QUADRILLION_LOG_LEVEL",
    "QUADRILLION_EVENTS",
    "QUADRILLION_METRICS_PORT",
];

/// Parses a space-separated pattern such as `". u . d r"`.
pub fn pattern(s: &str) -> Sequence {
    s.parse().expect("valid pattern")
}

/// A fresh engine driven forward until it sits in `target`.
pub fn engine_at(target: Phase) -> PuzzleEngine {
    let mut engine = PuzzleEngine::new();
    while engine.phase() < target {
        let plan = solver::plan_phase(engine.sequence(), engine.phase());
        assert!(!plan.is_empty(), "no plan out of phase {}", engine.phase());
        for action in plan {
            engine.apply(&action).expect("planned action accepted");
        }
    }
    assert_eq!(engine.phase(), target);
    engine
}

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quadrillion"));
    cmd.args(["--color", "never", "--quiet"]).args(args);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Runs the binary to completion with no stdin.
pub fn run_cli(args: &[&str]) -> Output {
    command(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run quadrillion")
}

/// Runs `play` with `input` piped to stdin; the session ends at EOF.
pub fn run_play(input: &str, extra: &[&str]) -> Output {
    let mut args = vec!["play"];
    args.extend_from_slice(extra);
    let mut child = command(&args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn quadrillion");

    child
        .stdin
        .take()
        .expect("stdin not captured")
        .write_all(input.as_bytes())
        .expect("write to stdin");

    child.wait_with_output().expect("wait for quadrillion")
}

/// Stdout as a lossy string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
