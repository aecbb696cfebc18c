//! Tree Builder Use Case
//!
//! Produces a current snapshot of the allowed roots as a TreeNode forest,
//! tolerant of partial I/O failure: an unreadable subtree is omitted with a
//! warning, an unavailable root is flagged without touching the others.

use std::path::PathBuf;

use crate::domain::entities::{AggregateStats, TreeNode};
use crate::domain::ports::{EntryInfo, EntryKind, EventSink, Storage, StoreEvent};
use crate::domain::value_objects::{AllowedRoot, RootSet};

use super::result::{Forest, UnavailableRoot, WalkWarning};

/// One in-progress directory during the walk.
struct Frame {
    node: TreeNode,
    abs: PathBuf,
    pending: std::vec::IntoIter<EntryInfo>,
}

/// Tree builder use case - enumerates allowed roots into a forest
pub struct TreeBuilder<'a, S: Storage> {
    storage: &'a S,
    roots: &'a RootSet,
    events: &'a dyn EventSink,
}

impl<'a, S: Storage> TreeBuilder<'a, S> {
    pub fn new(storage: &'a S, roots: &'a RootSet, events: &'a dyn EventSink) -> Self {
        Self {
            storage,
            roots,
            events,
        }
    }

    /// Enumerate every allowed root.
    ///
    /// Never fails as a whole: roots that cannot be read end up in
    /// `unavailable_roots`, everything else is walked independently.
    pub fn build_forest(&self) -> Forest {
        let mut forest = Forest::default();

        for root in self.roots.iter() {
            self.events.on_event(StoreEvent::WalkStarted {
                root: root.name().to_string(),
            });

            match self.walk_root(root, &mut forest.stats, &mut forest.warnings) {
                Ok((node, files, bytes)) => {
                    self.events.on_event(StoreEvent::WalkCompleted {
                        root: root.name().to_string(),
                        files,
                        bytes,
                    });
                    forest.trees.insert(root.name().to_string(), node);
                }
                Err(reason) => {
                    self.events.on_event(StoreEvent::RootUnavailable {
                        root: root.name().to_string(),
                        reason: reason.clone(),
                    });
                    forest.unavailable_roots.push(UnavailableRoot {
                        name: root.name().to_string(),
                        reason,
                    });
                }
            }
        }

        forest
    }

    /// Depth-first walk of one root with an explicit frame stack.
    ///
    /// Language-level recursion is deliberately avoided here: nesting depth
    /// is controlled by whoever writes to the store, and the walk must not
    /// consume call stack proportional to it.
    fn walk_root(
        &self,
        root: &AllowedRoot,
        stats: &mut AggregateStats,
        warnings: &mut Vec<WalkWarning>,
    ) -> Result<(TreeNode, u64, u64), String> {
        let entries = self
            .storage
            .list_dir(root.path())
            .map_err(|err| err.to_string())?;

        let mut files: u64 = 0;
        let mut bytes: u64 = 0;

        // The root frame lives outside the stack, so every pop below has a
        // parent to attach to and the loop needs no underflow handling.
        let mut root_frame = Frame {
            node: TreeNode::directory(root.name(), ""),
            abs: root.path().to_path_buf(),
            pending: sorted(entries).into_iter(),
        };
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let top = stack.last_mut().unwrap_or(&mut root_frame);

            match top.pending.next() {
                Some(entry) => {
                    let rel = join_rel(&top.node.path, &entry.name);
                    match entry.kind {
                        EntryKind::File { size } => {
                            stats.record_file(root.name(), size);
                            files += 1;
                            bytes += size;
                            top.node.push_child(TreeNode::file(entry.name, rel, size));
                        }
                        EntryKind::Directory => {
                            let abs = top.abs.join(&entry.name);
                            match self.storage.list_dir(&abs) {
                                Ok(children) => {
                                    stats.record_directory(root.name());
                                    stack.push(Frame {
                                        node: TreeNode::directory(entry.name, rel),
                                        abs,
                                        pending: sorted(children).into_iter(),
                                    });
                                }
                                Err(err) => {
                                    // Unreadable or vanished mid-walk: omit
                                    // the subtree, keep walking the rest.
                                    let reason = err.to_string();
                                    self.events.on_event(StoreEvent::SubtreeSkipped {
                                        root: root.name().to_string(),
                                        path: rel.clone(),
                                        reason: reason.clone(),
                                    });
                                    warnings.push(WalkWarning {
                                        root: root.name().to_string(),
                                        path: rel,
                                        reason,
                                    });
                                }
                            }
                        }
                    }
                }
                None => match stack.pop() {
                    Some(finished) => {
                        let parent = stack.last_mut().unwrap_or(&mut root_frame);
                        parent.node.push_child(finished.node);
                    }
                    // An empty stack with a drained root frame: the walk of
                    // this root is complete.
                    None => return Ok((root_frame.node, files, bytes)),
                },
            }
        }
    }
}

/// Presentation ordering: directories before files, then ascending
/// lexicographic by name within each group. This is a contract with the
/// UI, not an optimization.
fn sorted(mut entries: Vec<EntryInfo>) -> Vec<EntryInfo> {
    entries.sort_by(|a, b| {
        let a_dir = matches!(a.kind, EntryKind::Directory);
        let b_dir = matches!(b.kind, EntryKind::Directory);
        b_dir.cmp(&a_dir).then_with(|| a.name.cmp(&b.name))
    });
    entries
}

fn join_rel(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
