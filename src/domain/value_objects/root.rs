//! Allowed Root Value Objects
//!
//! The set of storage roots an admin request may touch. Fixed at process
//! start from configuration, never derived from request input.

use std::path::{Path, PathBuf};

use crate::error::{StorekeepError, StorekeepResult};

use super::store_path::StorePath;

/// One allowed root: a logical name exposed to the UI and the absolute
/// backing path it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedRoot {
    name: String,
    path: PathBuf,
}

impl AllowedRoot {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> StorekeepResult<Self> {
        let name = name.into();
        let path = path.into();

        if name.trim().is_empty() {
            return Err(StorekeepError::EmptyRootName { path });
        }
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(StorekeepError::InvalidRootName {
                name,
                message: "must be a single path segment".to_string(),
            });
        }
        if !path.is_absolute() {
            return Err(StorekeepError::RelativeRootPath { name, path });
        }

        Ok(Self { name, path })
    }

    /// Logical name, e.g. "audio-storage".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute backing path on the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a validated relative path against this root.
    pub fn resolve(&self, relative: &StorePath) -> PathBuf {
        self.path.join(relative.to_rel_path())
    }
}

/// The closed set of allowed roots for this process.
///
/// Root names are unique; lookup is by whole logical name, never by string
/// prefix, so a root "audio" can never match a candidate under "audio2".
#[derive(Debug, Clone)]
pub struct RootSet {
    roots: Vec<AllowedRoot>,
}

impl RootSet {
    pub fn new(roots: Vec<AllowedRoot>) -> StorekeepResult<Self> {
        if roots.is_empty() {
            return Err(StorekeepError::NoRoots);
        }
        for (i, root) in roots.iter().enumerate() {
            if roots[..i].iter().any(|r| r.name == root.name) {
                return Err(StorekeepError::DuplicateRoot {
                    name: root.name.clone(),
                });
            }
        }
        Ok(Self { roots })
    }

    /// Roots in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &AllowedRoot> {
        self.roots.iter()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find a root by its logical name (exact match).
    pub fn by_name(&self, name: &str) -> Option<&AllowedRoot> {
        self.roots.iter().find(|r| r.name == name)
    }
}

/// A candidate path that passed the gate, bound to one concrete root and
/// one absolute location. Good for exactly one storage-layer call; never
/// cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedPath {
    root: String,
    relative: StorePath,
    absolute: PathBuf,
}

impl AuthorizedPath {
    pub(crate) fn new(root: &AllowedRoot, relative: StorePath) -> Self {
        let absolute = root.resolve(&relative);
        Self {
            root: root.name().to_string(),
            relative,
            absolute,
        }
    }

    /// Logical name of the owning root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Path relative to the owning root.
    pub fn relative(&self) -> &StorePath {
        &self.relative
    }

    /// Resolved absolute location on the backing store.
    pub fn absolute(&self) -> &Path {
        &self.absolute
    }
}
