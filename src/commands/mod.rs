//! Command handlers for the storekeep binary.

mod delete;
mod tree;

pub use delete::cmd_delete;
pub use tree::cmd_tree;
