//! Deletion report types.
//!
//! A bulk delete never collapses into a single pass/fail flag: the report
//! carries one outcome per requested path, in submitted order, plus the
//! derived counts.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PathRejection;

/// Semantic classification of a per-item failure.
///
/// Transport layers map these onto their own status vocabulary
/// (HTTP-style: InvalidPath ~ 400, Forbidden ~ 403, NotFound ~ 404,
/// Io ~ 500); the classification itself is transport-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// Malformed request: empty or all-whitespace path
    InvalidPath,
    /// Traversal attempt, path outside every allowed root, or a directory
    /// target
    Forbidden,
    /// Authorized path, but no such file at call time
    NotFound,
    /// The backing store refused the delete for a reason other than absence
    Io,
}

impl FailureKind {
    /// Classification for a path-gate rejection.
    pub fn from_rejection(rejection: &PathRejection) -> Self {
        match rejection {
            PathRejection::Empty => FailureKind::InvalidPath,
            PathRejection::Absolute
            | PathRejection::Traversal
            | PathRejection::OutsideRoots { .. }
            | PathRejection::IsDirectory { .. } => FailureKind::Forbidden,
        }
    }
}

/// Why one requested path failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFailure {
    pub kind: FailureKind,
    pub reason: String,
}

/// Outcome for one requested path, keyed by the path exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionOutcome {
    pub path: String,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<DeleteFailure>,
}

impl DeletionOutcome {
    pub fn success(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            succeeded: true,
            failure: None,
        }
    }

    pub fn failed(path: impl Into<String>, kind: FailureKind, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            succeeded: false,
            failure: Some(DeleteFailure {
                kind,
                reason: reason.into(),
            }),
        }
    }
}

/// Ordered, itemized result of a bulk deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeletionReport {
    pub outcomes: Vec<DeletionOutcome>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BulkDeletionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome, keeping the derived counts in step.
    pub fn push(&mut self, outcome: DeletionOutcome) {
        if outcome.succeeded {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
