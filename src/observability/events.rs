//! Structured event stream for `Quadrillion`.
//!
//! Discrete, typed events emitted while a session runs. Events are
//! serialized as newline-delimited JSON (JSONL) and carry a monotonically
//! increasing sequence number for ordering.

use std::io::{LineWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::phase::Phase;

// ---------------------------------------------------------------------------
// Event variants
// ---------------------------------------------------------------------------

/// A discrete event emitted during a puzzle session.
///
/// Each variant is tagged with `"type"` when serialized to JSON so consumers
/// can dispatch on the event kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A session has started.
    SessionStarted {
        /// When the session started.
        timestamp: DateTime<Utc>,
        /// Surface driving the session (e.g. `"terminal"`, `"script"`).
        surface: String,
        /// Initial arrangement.
        arrangement: String,
    },

    /// A session has ended.
    SessionEnded {
        /// When the session ended.
        timestamp: DateTime<Utc>,
        /// Phase at the end of the session.
        phase: Phase,
        /// Human-readable end reason.
        reason: String,
    },

    /// A cell was erased.
    TokenErased {
        /// When the cell was erased.
        timestamp: DateTime<Utc>,
        /// Phase the erase happened in.
        phase: Phase,
        /// Erased position.
        index: usize,
        /// Arrangement after the erase.
        arrangement: String,
    },

    /// A token was dragged to a new position.
    TokensReordered {
        /// When the move happened.
        timestamp: DateTime<Utc>,
        /// Phase the move happened in.
        phase: Phase,
        /// Source position.
        from: usize,
        /// Destination position.
        to: usize,
        /// Arrangement after the move.
        arrangement: String,
    },

    /// A mutator refused an action.
    ActionRejected {
        /// When the action was refused.
        timestamp: DateTime<Utc>,
        /// Phase at the time of the attempt.
        phase: Phase,
        /// The attempted action (e.g. `"move 4 5"`).
        action: String,
        /// Rejection label (e.g. `"reorder_not_permitted"`).
        reason: String,
    },

    /// A new phase has been entered.
    PhaseEntered {
        /// When the transition occurred.
        timestamp: DateTime<Utc>,
        /// Phase that was entered.
        phase_index: Phase,
        /// Whether clicking erases in the new phase.
        can_erase: bool,
        /// Whether dragging reorders in the new phase.
        can_drag: bool,
        /// Arrangement on entry.
        arrangement: String,
    },

    /// The terminal phase was reached.
    PuzzleSolved {
        /// When the puzzle was solved.
        timestamp: DateTime<Utc>,
        /// Accepted actions it took.
        actions: u64,
        /// Refused actions along the way.
        rejected: u64,
    },
}

// ---------------------------------------------------------------------------
// Envelope (adds sequence number via serde flatten)
// ---------------------------------------------------------------------------

/// Wraps an [`Event`] with a monotonically increasing sequence number.
#[derive(Debug, Serialize)]
struct EventEnvelope {
    /// Zero-based, monotonically increasing sequence counter.
    sequence: u64,
    /// The wrapped event (flattened into the same JSON object).
    #[serde(flatten)]
    event: Event,
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Line-oriented JSONL event sink shared by a session.
///
/// Every emitted event is numbered, serialized to one line, and handed to
/// a [`LineWriter`] so the line reaches the sink as soon as it is complete.
/// Events that cannot be serialized or written are dropped without
/// affecting the session.
pub struct EventEmitter {
    sink: Mutex<LineWriter<Box<dyn Write + Send>>>,
    next: AtomicU64,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("emitted", &self.event_count())
            .finish_non_exhaustive()
    }
}

impl EventEmitter {
    /// Creates an emitter over any writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(LineWriter::new(writer)),
            next: AtomicU64::new(0),
        }
    }

    /// Creates an emitter that discards events but still numbers them.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(Box::new(std::io::sink()))
    }

    /// Creates (or truncates) `path` and emits into it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(Box::new(std::fs::File::create(path)?)))
    }

    /// Numbers `event` and writes it as one JSON line.
    pub fn emit(&self, event: Event) {
        let sequence = self.next.fetch_add(1, Ordering::SeqCst);
        let Ok(mut line) = serde_json::to_vec(&EventEnvelope { sequence, event }) else {
            return;
        };
        line.push(b'\n');
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.write_all(&line);
        }
    }

    /// Number of events emitted so far, including dropped ones.
    #[must_use]
    pub fn event_count(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
