//! Stderr Event Sink
//!
//! One timestamped line per event. Deletion events arrive in execution
//! order, so the resulting log doubles as the audit trail for destructive
//! operations.

use crate::domain::ports::{EventSink, StoreEvent};

/// Event sink that writes timestamped log lines to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrEventSink;

impl StderrEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for StderrEventSink {
    fn on_event(&self, event: StoreEvent) {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        eprintln!("[{}] {}", ts, describe(&event));
    }
}

fn describe(event: &StoreEvent) -> String {
    match event {
        StoreEvent::WalkStarted { root } => format!("walk {}: started", root),
        StoreEvent::WalkCompleted { root, files, bytes } => {
            format!("walk {}: {} files, {} bytes", root, files, bytes)
        }
        StoreEvent::SubtreeSkipped { root, path, reason } => {
            format!("walk {}: skipped {}: {}", root, path, reason)
        }
        StoreEvent::RootUnavailable { root, reason } => {
            format!("root {} unavailable: {}", root, reason)
        }
        StoreEvent::DeleteStarted { index, path } => {
            format!("delete #{} {}: executing", index, path)
        }
        StoreEvent::DeleteSucceeded { index, path } => {
            format!("delete #{} {}: ok", index, path)
        }
        StoreEvent::DeleteFailed { index, path, reason } => {
            format!("delete #{} {}: failed: {}", index, path, reason)
        }
        StoreEvent::BatchCompleted { succeeded, failed } => {
            format!("batch done: {} succeeded, {} failed", succeeded, failed)
        }
    }
}
