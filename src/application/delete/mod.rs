//! Delete Use Case
//!
//! Guarded single and bulk file deletion with per-item accounting.

mod result;
mod use_case;

pub use result::{BulkDeletionReport, DeleteFailure, DeletionOutcome, FailureKind};
pub use use_case::DeletionOrchestrator;
