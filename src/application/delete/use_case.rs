//! Deletion Orchestrator Use Case
//!
//! Executes a requested set of file deletions with per-item authorization
//! and aggregated partial-failure reporting. Candidates are processed
//! strictly sequentially in submitted order: destructive operations stay
//! auditable and the backing store sees at most one mutation at a time.
//!
//! There is no rollback. If items 1-3 of 5 succeed and item 4 fails, items
//! 1-3 stay deleted; the report only promises accurate accounting. The gap
//! between the authorization check and the delete call is a known TOCTOU
//! limitation of this design.

use crate::domain::ports::{EntryKind, EventSink, Storage, StoreEvent};
use crate::domain::services::authorize;
use crate::domain::value_objects::{PathRejection, RootSet};

use super::result::{BulkDeletionReport, DeletionOutcome, FailureKind};

/// Deletion orchestrator use case
pub struct DeletionOrchestrator<'a, S: Storage> {
    storage: &'a S,
    roots: &'a RootSet,
    events: &'a dyn EventSink,
}

impl<'a, S: Storage> DeletionOrchestrator<'a, S> {
    pub fn new(storage: &'a S, roots: &'a RootSet, events: &'a dyn EventSink) -> Self {
        Self {
            storage,
            roots,
            events,
        }
    }

    /// Delete many files, sequentially, in submitted order.
    ///
    /// Failure of one item never aborts the batch. The caller decides
    /// whether to re-enumerate afterwards; this use case never does.
    pub fn delete_many(&self, candidates: &[String]) -> BulkDeletionReport {
        let mut report = BulkDeletionReport::new();

        for (index, candidate) in candidates.iter().enumerate() {
            report.push(self.delete_item(index, candidate));
        }

        self.events.on_event(StoreEvent::BatchCompleted {
            succeeded: report.succeeded,
            failed: report.failed,
        });

        report
    }

    /// Delete a single file: the one-candidate case of `delete_many`,
    /// sharing its validation and classification logic.
    pub fn delete_one(&self, candidate: &str) -> DeletionOutcome {
        let mut report = self.delete_many(&[candidate.to_string()]);
        report.outcomes.pop().unwrap_or_else(|| {
            DeletionOutcome::failed(candidate, FailureKind::InvalidPath, "empty batch")
        })
    }

    fn delete_item(&self, index: usize, candidate: &str) -> DeletionOutcome {
        // Re-authorized on every call: nothing from a prior enumeration or
        // a prior batch is trusted.
        let authorized = match authorize(candidate, self.roots) {
            Ok(authorized) => authorized,
            Err(rejection) => return self.reject(index, candidate, rejection),
        };

        // Directory targets are refused before the delete call. This needs
        // metadata, so it lives here rather than in the pure gate, but it
        // shares the gate's rejection taxonomy.
        match self.storage.kind_of(authorized.absolute()) {
            Ok(EntryKind::Directory) => {
                let rejection = PathRejection::IsDirectory {
                    candidate: candidate.to_string(),
                };
                return self.reject(index, candidate, rejection);
            }
            Ok(EntryKind::File { .. }) => {}
            Err(err) if err.is_not_found() => {
                return self.fail(index, candidate, FailureKind::NotFound, err.to_string());
            }
            Err(err) => {
                return self.fail(index, candidate, FailureKind::Io, err.to_string());
            }
        }

        self.events.on_event(StoreEvent::DeleteStarted {
            index,
            path: candidate.to_string(),
        });

        match self.storage.remove_file(authorized.absolute()) {
            Ok(()) => {
                self.events.on_event(StoreEvent::DeleteSucceeded {
                    index,
                    path: candidate.to_string(),
                });
                DeletionOutcome::success(candidate)
            }
            // Vanished between the check and the call: the snapshot the UI
            // selected from was stale, report it as not-found.
            Err(err) if err.is_not_found() => {
                self.fail(index, candidate, FailureKind::NotFound, err.to_string())
            }
            Err(err) => self.fail(index, candidate, FailureKind::Io, err.to_string()),
        }
    }

    fn reject(&self, index: usize, candidate: &str, rejection: PathRejection) -> DeletionOutcome {
        let kind = FailureKind::from_rejection(&rejection);
        self.fail(index, candidate, kind, rejection.to_string())
    }

    fn fail(
        &self,
        index: usize,
        candidate: &str,
        kind: FailureKind,
        reason: String,
    ) -> DeletionOutcome {
        self.events.on_event(StoreEvent::DeleteFailed {
            index,
            path: candidate.to_string(),
            reason: reason.clone(),
        });
        DeletionOutcome::failed(candidate, kind, reason)
    }
}
