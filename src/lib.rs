//! storekeep - content-store enumeration and guarded deletion
//!
//! storekeep walks one or more fixed storage roots into a tree model safe
//! to hand to an admin UI, and executes bulk file deletions against those
//! roots behind a path-safety gate with per-item partial-failure
//! accounting.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::delete::{
    BulkDeletionReport, DeleteFailure, DeletionOrchestrator, DeletionOutcome, FailureKind,
};
pub use application::enumerate::{Forest, TreeBuilder, UnavailableRoot, WalkWarning};
pub use config::Config;
pub use domain::entities::{AggregateStats, TreeNode};
pub use domain::ports::{EventSink, NoopEventSink, Storage, StoreEvent};
pub use domain::services::authorize;
pub use domain::value_objects::{AllowedRoot, AuthorizedPath, PathRejection, RootSet, StorePath};
pub use error::{StorekeepError, StorekeepResult};
pub use infrastructure::{JsonEventSink, LocalStore, StderrEventSink};
