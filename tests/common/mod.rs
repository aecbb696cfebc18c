//! Shared fixtures for storekeep integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use storekeep::{AllowedRoot, EventSink, RootSet, StoreEvent};
use tempfile::TempDir;

/// A temporary on-disk content store.
///
/// Roots live directly under the tempdir; `write_file` and `mkdir` take
/// root-prefixed slash paths, the same shape the gate accepts.
pub struct StoreFixture {
    dir: TempDir,
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create store tempdir"),
        }
    }

    /// Absolute path of a root-prefixed relative path.
    pub fn path(&self, rel: &str) -> PathBuf {
        let mut path = self.dir.path().to_path_buf();
        for segment in rel.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }

    /// Create a directory (and parents).
    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.path(rel)).expect("create fixture dir");
    }

    /// Create a file of `size` bytes (and parent directories).
    pub fn write_file(&self, rel: &str, size: usize) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture parents");
        }
        std::fs::write(&path, vec![b'x'; size]).expect("write fixture file");
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Build a root set mapping each name to `<tempdir>/<name>`.
    ///
    /// The backing directory is not created here, so a name without a
    /// matching `mkdir` acts as an unavailable root.
    pub fn roots(&self, names: &[&str]) -> RootSet {
        let roots = names
            .iter()
            .map(|name| {
                AllowedRoot::new(*name, self.dir.path().join(name)).expect("valid fixture root")
            })
            .collect();
        RootSet::new(roots).expect("valid fixture root set")
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Event sink that records everything it sees, in order.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn on_event(&self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}
