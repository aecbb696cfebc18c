//! JSON Event Sink
//!
//! Outputs store events as NDJSON for automation consumption.

use crate::domain::ports::{EventSink, StoreEvent};
use serde_json::json;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: StoreEvent) {
        let value = match event {
            StoreEvent::WalkStarted { root } => json!({
                "event": "walk_started",
                "root": root,
            }),
            StoreEvent::WalkCompleted { root, files, bytes } => json!({
                "event": "walk_completed",
                "root": root,
                "files": files,
                "bytes": bytes,
            }),
            StoreEvent::SubtreeSkipped { root, path, reason } => json!({
                "event": "subtree_skipped",
                "root": root,
                "path": path,
                "reason": reason,
            }),
            StoreEvent::RootUnavailable { root, reason } => json!({
                "event": "root_unavailable",
                "root": root,
                "reason": reason,
            }),
            StoreEvent::DeleteStarted { index, path } => json!({
                "event": "delete_started",
                "index": index,
                "path": path,
            }),
            StoreEvent::DeleteSucceeded { index, path } => json!({
                "event": "delete_succeeded",
                "index": index,
                "path": path,
            }),
            StoreEvent::DeleteFailed { index, path, reason } => json!({
                "event": "delete_failed",
                "index": index,
                "path": path,
                "reason": reason,
            }),
            StoreEvent::BatchCompleted { succeeded, failed } => json!({
                "event": "batch_completed",
                "succeeded": succeeded,
                "failed": failed,
            }),
        };
        self.write_event(value);
    }
}
