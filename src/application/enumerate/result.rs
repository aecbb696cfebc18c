//! Result of an enumeration walk.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AggregateStats, TreeNode};

/// An allowed root that could not be enumerated at all.
///
/// Distinct from an omitted subtree: the root was missing or unreadable,
/// so it has no tree in the forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableRoot {
    pub name: String,
    pub reason: String,
}

/// A subtree that was omitted from the forest because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkWarning {
    pub root: String,
    pub path: String,
    pub reason: String,
}

/// The complete result of one enumeration call: one tree per available
/// root, keyed by logical root name, plus the stats accumulated during the
/// same walk. Built fresh per call, never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forest {
    pub trees: BTreeMap<String, TreeNode>,
    pub stats: AggregateStats,
    pub unavailable_roots: Vec<UnavailableRoot>,
    pub warnings: Vec<WalkWarning>,
}

impl Forest {
    /// True when every requested root was enumerated and no subtree was
    /// omitted.
    pub fn is_complete(&self) -> bool {
        self.unavailable_roots.is_empty() && self.warnings.is_empty()
    }

    /// Tree for one logical root, if it was available.
    pub fn tree(&self, root: &str) -> Option<&TreeNode> {
        self.trees.get(root)
    }
}
