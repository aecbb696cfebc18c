//! Ports - interface definitions for infrastructure

mod events;
mod storage;

pub use events::{EventSink, NoopEventSink, StoreEvent};
pub use storage::{EntryInfo, EntryKind, Storage, StorageError, StorageResult};

#[cfg(test)]
pub use storage::MemStorage;
