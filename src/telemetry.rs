//! Application telemetry events and sinks.
//!
//! Reframe records a small set of structured events (rewrite latency and
//! clipboard copies) to support debugging. Nothing is transmitted anywhere.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Reframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A rewrite or retry request finished.
    RewriteCompleted {
        /// Theme that was requested.
        theme: String,
        /// Wall-clock time spent waiting for the provider.
        latency_ms: u64,
        /// Whether the displayed record is an error fallback.
        fallback: bool,
    },
    /// Rewritten text was placed on the clipboard.
    ClipboardCopied {
        /// Number of characters copied.
        chars: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync + std::fmt::Debug {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Used by the non-interactive modes.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

/// Forwards telemetry events to the `tracing` subscriber.
///
/// The TUI owns the terminal, so events go wherever logging goes (a log
/// file, or nowhere).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "reframe::telemetry", event = %serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
