//! Local Store Implementation
//!
//! Implements the Storage port over std::fs.
//!
//! Symlinks are classified without following them: a link shows up as a
//! file entry with the link's own size, so enumeration cannot be steered
//! outside an allowed root or into a cycle through the link, and deleting
//! the entry removes the link, not its target.

use std::path::Path;

use crate::domain::ports::{EntryInfo, EntryKind, Storage, StorageError, StorageResult};

/// Local backing store
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    /// Create a new LocalStore instance
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStore {
    fn list_dir(&self, dir: &Path) -> StorageResult<Vec<EntryInfo>> {
        let read = std::fs::read_dir(dir).map_err(|err| classify(err, dir))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|err| classify(err, dir))?;
            // DirEntry::metadata does not traverse symlinks, which is
            // exactly the classification we want.
            let info = entry_from_metadata(
                entry.file_name().to_string_lossy().into_owned(),
                entry.metadata(),
                &entry.path(),
            )?;
            if let Some(info) = info {
                entries.push(info);
            }
        }
        Ok(entries)
    }

    fn kind_of(&self, path: &Path) -> StorageResult<EntryKind> {
        let meta = std::fs::symlink_metadata(path).map_err(|err| classify(err, path))?;
        if meta.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File { size: meta.len() })
        }
    }

    fn remove_file(&self, path: &Path) -> StorageResult<()> {
        std::fs::remove_file(path).map_err(|err| classify(err, path))
    }
}

/// Classify one directory entry from its metadata result.
///
/// A listing is a snapshot of a live store: an entry can vanish between
/// `read_dir` and the metadata call. That entry is dropped from the listing
/// (Ok(None)) rather than failing the whole directory; any other metadata
/// failure still aborts the listing.
fn entry_from_metadata(
    name: String,
    meta: std::io::Result<std::fs::Metadata>,
    path: &Path,
) -> StorageResult<Option<EntryInfo>> {
    match meta {
        Ok(meta) => {
            let kind = if meta.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File { size: meta.len() }
            };
            Ok(Some(EntryInfo { name, kind }))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(classify(err, path)),
    }
}

/// Map an io::Error to the port's error type, keeping the path that the
/// plain `From` impl cannot know.
fn classify(err: std::io::Error, path: &Path) -> StorageError {
    match err.kind() {
        std::io::ErrorKind::NotFound => StorageError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(path.to_path_buf()),
        _ => StorageError::Io(err),
    }
}
