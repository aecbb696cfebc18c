//! Store Event Port
//!
//! Observable interface for enumeration and deletion. Deletions are
//! executed sequentially and events arrive in execution order, which is
//! what makes the operational log an audit trail rather than a sample.

/// Event emitted during enumeration and deletion
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// Walk of one allowed root started
    WalkStarted { root: String },

    /// Walk of one allowed root completed
    WalkCompleted { root: String, files: u64, bytes: u64 },

    /// A subtree could not be read and was omitted from the forest
    SubtreeSkipped {
        root: String,
        path: String,
        reason: String,
    },

    /// An allowed root was missing or unreadable
    RootUnavailable { root: String, reason: String },

    /// A candidate was authorized and its deletion is executing
    DeleteStarted { index: usize, path: String },

    /// A file was deleted
    DeleteSucceeded { index: usize, path: String },

    /// A candidate was rejected or its deletion failed
    DeleteFailed {
        index: usize,
        path: String,
        reason: String,
    },

    /// A deletion batch finished
    BatchCompleted { succeeded: usize, failed: usize },
}

/// Trait for receiving store events
///
/// Implementations can be:
/// - StderrEventSink: timestamped operational log lines
/// - NDJSON emission in the CLI's --json mode
/// - NoopEventSink: silent operation
pub trait EventSink: Send + Sync {
    /// Handle a store event
    fn on_event(&self, event: StoreEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: StoreEvent) {
        // Do nothing
    }
}
