//! Core domain entities

mod tree;

pub use tree::{AggregateStats, TreeNode};
