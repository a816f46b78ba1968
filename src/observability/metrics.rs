//! Metrics collection for `Quadrillion`.
//!
//! Prometheus-compatible counters and gauges recorded through the
//! `metrics` facade. Every recording function is a no-op until
//! [`init_metrics`] installs a recorder.

use std::sync::atomic::{AtomicBool, Ordering};

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::{QuadrillionError, Rejection};
use crate::phase::Phase;

/// Guard to prevent double-initialization of the metrics recorder.
static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initializes the global metrics recorder.
///
/// When `port` is `Some`, a Prometheus HTTP listener is started on
/// `127.0.0.1:<port>`. When `None`, the recorder is installed without
/// an HTTP endpoint.
///
/// # Errors
///
/// Returns `QuadrillionError::Metrics` if the recorder or HTTP listener
/// cannot be installed (e.g. port already in use).
pub fn init_metrics(port: Option<u16>) -> Result<(), QuadrillionError> {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        tracing::debug!("metrics already initialized, skipping");
        return Ok(());
    }
    port.map_or_else(
        || PrometheusBuilder::new().install_recorder().map(|_| ()),
        |p| {
            PrometheusBuilder::new()
                .with_http_listener(([127, 0, 0, 1], p))
                .install()
        },
    )
    .map_err(|e| QuadrillionError::Metrics(e.to_string()))?;

    describe_metrics();
    Ok(())
}

/// Registers metric descriptions with the global recorder.
fn describe_metrics() {
    describe_counter!(
        "quadrillion_actions_total",
        "Accepted puzzle actions by kind"
    );
    describe_counter!(
        "quadrillion_rejections_total",
        "Refused puzzle actions by reason"
    );
    describe_counter!(
        "quadrillion_phase_transitions_total",
        "Total number of phase transitions"
    );
    describe_gauge!("quadrillion_current_phase", "Currently active phase");
}

/// Records an accepted action (`"erase"` or `"move"`).
pub fn record_action(kind: &'static str) {
    counter!("quadrillion_actions_total", "action" => kind).increment(1);
}

/// Records a refused action.
pub fn record_rejection(rejection: &Rejection) {
    counter!("quadrillion_rejections_total", "reason" => rejection.label()).increment(1);
}

/// Records a phase transition and updates the current phase gauge.
pub fn record_phase_transition(from: Phase, to: Phase) {
    counter!(
        "quadrillion_phase_transitions_total",
        "from" => from.to_string(),
        "to" => to.to_string()
    )
    .increment(1);
    set_current_phase(to);
}

/// Sets the current phase gauge.
pub fn set_current_phase(phase: Phase) {
    gauge!("quadrillion_current_phase").set(f64::from(phase.value()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_functions_do_not_panic_without_recorder() {
        // metrics macros silently no-op when no global recorder is installed
        record_action("erase");
        record_action("move");
        record_rejection(&Rejection::IndexOutOfRange { index: 12, len: 11 });
        record_phase_transition(Phase::INITIAL, Phase::new(1).unwrap());
        set_current_phase(Phase::TERMINAL);
    }
}
