//! Transcript logging port
//!
//! Captures the machine-readable record of a run: plans, worker outputs,
//! failures, and the final verdict. Distinct from tracing diagnostics.

use serde_json::Value;

/// A structured transcript event
pub struct TranscriptEvent {
    /// Event type identifier (e.g., "plan_result", "worker_output")
    pub event_type: &'static str,
    /// JSON payload with event-specific data
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self { event_type, payload }
    }
}

/// Port for recording transcript events
///
/// `log` is synchronous and non-fallible so recording can never disturb
/// a run in flight. Adapters swallow their own IO errors.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op logger for tests and for runs with transcripts disabled
pub struct NoTranscript;

impl TranscriptLogger for NoTranscript {
    fn log(&self, _event: TranscriptEvent) {}
}
