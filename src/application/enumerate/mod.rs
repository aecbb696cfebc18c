//! Enumerate Use Case
//!
//! Walks the allowed roots into a TreeNode forest with aggregate stats.

mod result;
mod use_case;

pub use result::{Forest, UnavailableRoot, WalkWarning};
pub use use_case::TreeBuilder;
