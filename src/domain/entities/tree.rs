//! Tree Entities
//!
//! The enumerated view of the content store handed to the admin UI.
//! Constructed fresh per enumeration call and discarded with the response;
//! nothing here is cached or mutated after the walk completes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One filesystem entry in the enumerated forest.
///
/// `path` is relative to the owning allowed root, slash-separated, never
/// absolute and never containing a `..` segment; the root's own node
/// carries an empty path. `size` is present only for files, `children`
/// only for directories (an empty directory has an empty list, not a
/// missing one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Build a file node.
    pub fn file(name: impl Into<String>, path: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_directory: false,
            size: Some(size),
            children: None,
        }
    }

    /// Build a directory node with no children yet.
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_directory: true,
            size: None,
            children: Some(Vec::new()),
        }
    }

    /// Append a child to a directory node.
    ///
    /// Callers are responsible for ordering; the tree builder pushes
    /// children in the presentation order (directories first, then files,
    /// lexicographic within each group).
    pub fn push_child(&mut self, child: TreeNode) {
        debug_assert!(self.is_directory, "only directories hold children");
        self.children.get_or_insert_with(Vec::new).push(child);
    }
}

/// Totals accumulated during a single enumeration walk.
///
/// `per_root_items` counts every entry (files and directories) below each
/// root; a BTreeMap keeps serialized output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_files: u64,
    pub total_bytes: u64,
    pub per_root_items: BTreeMap<String, u64>,
}

impl AggregateStats {
    pub fn record_file(&mut self, root: &str, size: u64) {
        self.total_files += 1;
        self.total_bytes += size;
        self.record_item(root);
    }

    pub fn record_directory(&mut self, root: &str) {
        self.record_item(root);
    }

    fn record_item(&mut self, root: &str) {
        *self.per_root_items.entry(root.to_string()).or_insert(0) += 1;
    }
}
