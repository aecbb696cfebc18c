//! Storage port - abstraction over the backing content store
//!
//! The walk and the orchestrator only ever touch the store through this
//! trait, which keeps both testable against an in-memory double and keeps
//! every real I/O call in one infrastructure module.

use std::path::{Path, PathBuf};

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operation errors
#[derive(Debug)]
pub enum StorageError {
    /// Entry not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(PathBuf::new()),
            _ => StorageError::Io(err),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotFound(path) => write!(f, "not found: {}", path.display()),
            StorageError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            StorageError::Io(err) => write!(f, "I/O error: {}", err),
            StorageError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// What kind of entry a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File { size: u64 },
    Directory,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub kind: EntryKind,
}

/// Abstract content-store interface
///
/// Implementations:
/// - `LocalStore` - std::fs against the local disk
/// - in-memory doubles in tests
///
/// Symlink policy: implementations classify entries without following
/// links. A symlink is reported as a file with the link's own size, so a
/// link can neither pull content from outside a root into a listing nor
/// create a walk cycle.
pub trait Storage {
    /// List the entries of a directory (unspecified order).
    fn list_dir(&self, dir: &Path) -> StorageResult<Vec<EntryInfo>>;

    /// Classify a single path.
    fn kind_of(&self, path: &Path) -> StorageResult<EntryKind>;

    /// Remove a single file. Never removes directories.
    fn remove_file(&self, path: &Path) -> StorageResult<()>;
}

/// In-memory store for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared. Records
/// every operation, which lets tests assert that rejected candidates never
/// reach the storage layer.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemStorage {
    inner: std::sync::Arc<std::sync::Mutex<MemStorageInner>>,
}

#[cfg(test)]
#[derive(Default)]
struct MemStorageInner {
    files: std::collections::HashMap<PathBuf, u64>,
    dirs: std::collections::HashSet<PathBuf>,
    denied: std::collections::HashSet<PathBuf>,
    calls: Vec<String>,
}

#[cfg(test)]
impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory (parents are not created implicitly).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.inner.lock().unwrap().dirs.insert(path.into());
    }

    /// Register a file with a size (parent must be added separately).
    pub fn add_file(&self, path: impl Into<PathBuf>, size: u64) {
        self.inner.lock().unwrap().files.insert(path.into(), size);
    }

    /// Make every operation on this path fail with PermissionDenied.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.inner.lock().unwrap().denied.insert(path.into());
    }

    /// Operations performed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn has_file(&self, path: impl Into<PathBuf>) -> bool {
        self.inner.lock().unwrap().files.contains_key(&path.into())
    }
}

#[cfg(test)]
impl Storage for MemStorage {
    fn list_dir(&self, dir: &Path) -> StorageResult<Vec<EntryInfo>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("list_dir {}", dir.display()));
        if inner.denied.contains(dir) {
            return Err(StorageError::PermissionDenied(dir.to_path_buf()));
        }
        if !inner.dirs.contains(dir) {
            return Err(StorageError::NotFound(dir.to_path_buf()));
        }

        let mut entries = Vec::new();
        for d in &inner.dirs {
            if d.parent() == Some(dir) {
                if let Some(name) = d.file_name() {
                    entries.push(EntryInfo {
                        name: name.to_string_lossy().into_owned(),
                        kind: EntryKind::Directory,
                    });
                }
            }
        }
        for (f, size) in &inner.files {
            if f.parent() == Some(dir) {
                if let Some(name) = f.file_name() {
                    entries.push(EntryInfo {
                        name: name.to_string_lossy().into_owned(),
                        kind: EntryKind::File { size: *size },
                    });
                }
            }
        }
        Ok(entries)
    }

    fn kind_of(&self, path: &Path) -> StorageResult<EntryKind> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("kind_of {}", path.display()));
        if inner.denied.contains(path) {
            return Err(StorageError::PermissionDenied(path.to_path_buf()));
        }
        if inner.dirs.contains(path) {
            return Ok(EntryKind::Directory);
        }
        if let Some(size) = inner.files.get(path) {
            return Ok(EntryKind::File { size: *size });
        }
        Err(StorageError::NotFound(path.to_path_buf()))
    }

    fn remove_file(&self, path: &Path) -> StorageResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("remove_file {}", path.display()));
        if inner.denied.contains(path) {
            return Err(StorageError::PermissionDenied(path.to_path_buf()));
        }
        if inner.dirs.contains(path) {
            return Err(StorageError::Other(format!(
                "{} is a directory",
                path.display()
            )));
        }
        match inner.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_kind_maps_to_variants() {
        let nf: StorageError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(nf.is_not_found());

        let pd: StorageError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no").into();
        assert!(matches!(pd, StorageError::PermissionDenied(_)));

        let other: StorageError =
            std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into();
        assert!(matches!(other, StorageError::Io(_)));
    }

    #[test]
    fn display_includes_reason() {
        let err = StorageError::Other("device unplugged".to_string());
        assert_eq!(err.to_string(), "device unplugged");
    }
}
