//! Event sink implementations

mod json;
mod stderr;

pub use json::JsonEventSink;
pub use stderr::StderrEventSink;
