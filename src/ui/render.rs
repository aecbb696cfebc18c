//! Plain-text rendering of forests and deletion reports.
//!
//! Machine consumers use --json; these renderers are for humans reading a
//! terminal, so they favour alignment-free simplicity over decoration.

use crate::application::delete::BulkDeletionReport;
use crate::application::enumerate::Forest;
use crate::domain::entities::TreeNode;
use std::fmt::Write;

/// Render a forest as an indented tree followed by the stats summary and
/// any unavailable roots.
pub fn render_forest(forest: &Forest) -> String {
    let mut out = String::new();

    for tree in forest.trees.values() {
        render_tree(&mut out, tree);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} files, {}",
        forest.stats.total_files,
        format_bytes(forest.stats.total_bytes)
    );
    for (root, items) in &forest.stats.per_root_items {
        let _ = writeln!(out, "  {}: {} items", root, items);
    }

    for unavailable in &forest.unavailable_roots {
        let _ = writeln!(
            out,
            "unavailable: {} ({})",
            unavailable.name, unavailable.reason
        );
    }
    for warning in &forest.warnings {
        let _ = writeln!(
            out,
            "skipped: {}/{} ({})",
            warning.root, warning.path, warning.reason
        );
    }

    out
}

/// Depth-first text rendering with an explicit stack; tree depth follows
/// directory nesting and is not ours to bound.
fn render_tree(out: &mut String, root: &TreeNode) {
    let mut stack: Vec<(&TreeNode, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        let indent = "  ".repeat(depth);
        if node.is_directory {
            let _ = writeln!(out, "{}{}/", indent, node.name);
            if let Some(children) = node.children.as_ref() {
                for child in children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        } else {
            let size = node.size.unwrap_or(0);
            let _ = writeln!(out, "{}{} ({})", indent, node.name, format_bytes(size));
        }
    }
}

/// Render a deletion report, one line per outcome in submitted order.
pub fn render_report(report: &BulkDeletionReport) -> String {
    let mut out = String::new();

    for outcome in &report.outcomes {
        if outcome.succeeded {
            let _ = writeln!(out, "deleted  {}", outcome.path);
        } else if let Some(failure) = &outcome.failure {
            let _ = writeln!(out, "failed   {}: {}", outcome.path, failure.reason);
        }
    }

    let _ = writeln!(
        out,
        "{} deleted, {} failed",
        report.succeeded, report.failed
    );
    out
}

/// Human-readable byte count (binary units).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
