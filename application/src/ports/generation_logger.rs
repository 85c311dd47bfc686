//! Port for structured generation logging.
//!
//! Defines the [`GenerationLogger`] trait for recording every prompt sent
//! to the model together with its outcome.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! prompt/completion transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured generation event for logging.
pub struct GenerationEvent {
    /// Event type identifier (`"generation_completed"`, `"generation_failed"`).
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging generation events to a structured log.
///
/// `log` is synchronous and infallible; implementations swallow their own
/// I/O errors.
pub trait GenerationLogger: Send + Sync {
    /// Record a generation event.
    fn log(&self, event: GenerationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}
