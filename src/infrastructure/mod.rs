//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Backing-store implementation over std::fs
//! - `events/` - Event sinks (stderr log, NDJSON)

pub mod events;
pub mod fs;

// Re-export for convenience
pub use events::{JsonEventSink, StderrEventSink};
pub use fs::LocalStore;
