//! Store Path Value Object
//!
//! A validated relative path inside the content store:
//! - No path traversal segments (..)
//! - Never absolute
//! - Normalized to forward slashes, no empty or `.` segments
//!
//! Construction is the only way to obtain a `StorePath`, so any function
//! that takes one can rely on these guarantees without re-checking.

use std::fmt;
use std::path::PathBuf;

/// Why a candidate path was refused by the gate.
///
/// This is the full classification shared by single and bulk deletion:
/// `IsDirectory` is produced by the orchestrator (it needs metadata), the
/// rest by pure string validation before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathRejection {
    /// Candidate was empty or all whitespace
    Empty,
    /// Candidate was an absolute path
    Absolute,
    /// Candidate contains a parent-directory (`..`) segment
    Traversal,
    /// Candidate does not resolve under any configured allowed root
    OutsideRoots { candidate: String },
    /// Candidate resolves to a directory (or an allowed root itself)
    IsDirectory { candidate: String },
}

impl PathRejection {
    /// `true` for rejections the gate detects without touching the
    /// filesystem.
    pub fn is_pre_io(&self) -> bool {
        !matches!(self, PathRejection::IsDirectory { .. })
    }
}

impl fmt::Display for PathRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathRejection::Empty => write!(f, "path is empty"),
            PathRejection::Absolute => write!(f, "absolute paths are not allowed"),
            PathRejection::Traversal => {
                write!(f, "path contains a parent-directory segment")
            }
            PathRejection::OutsideRoots { candidate } => {
                write!(f, "path '{}' is outside every allowed root", candidate)
            }
            PathRejection::IsDirectory { candidate } => {
                write!(f, "path '{}' is a directory, only files can be deleted", candidate)
            }
        }
    }
}

impl std::error::Error for PathRejection {}

/// A validated relative path within the content store.
///
/// Stored as a normalized slash-separated string so the same value is safe
/// to hand to the UI, log lines, and `PathBuf::join` alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorePath(String);

impl StorePath {
    /// Parse and validate a candidate path string.
    ///
    /// Accepts backslash separators (normalized to `/`) and collapses empty
    /// and `.` segments, so `"audio//./x.mp3"` parses to `"audio/x.mp3"`.
    pub fn parse(raw: &str) -> Result<Self, PathRejection> {
        if raw.trim().is_empty() {
            return Err(PathRejection::Empty);
        }

        let normalized = raw.replace('\\', "/");

        if normalized.starts_with('/') || has_drive_prefix(&normalized) {
            return Err(PathRejection::Absolute);
        }

        let mut segments = Vec::new();
        for segment in normalized.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(PathRejection::Traversal),
                other => segments.push(other),
            }
        }

        if segments.is_empty() {
            // Nothing but separators and dot segments.
            return Err(PathRejection::Empty);
        }

        Ok(Self(segments.join("/")))
    }

    /// The normalized slash-separated form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments in order, all non-empty and free of `..`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// First segment - for gate candidates this is the logical root name.
    pub fn first_segment(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Everything after the first segment, if any.
    pub fn remainder(&self) -> Option<StorePath> {
        self.0
            .split_once('/')
            .map(|(_, rest)| StorePath(rest.to_string()))
    }

    /// The final segment (entry name).
    pub fn file_name(&self) -> &str {
        self.segments().last().unwrap_or_default()
    }

    /// Convert to a platform path for joining against a backing root.
    pub fn to_rel_path(&self) -> PathBuf {
        self.segments().collect()
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for StorePath {
    type Error = PathRejection;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Windows-style `C:` prefix check; such candidates are absolute for our
/// purposes even when running on Unix.
fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
