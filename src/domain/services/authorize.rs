//! Path Gate
//!
//! The single decision point for whether a candidate path string may be
//! turned into a filesystem operation. Pure string/path logic, no I/O:
//! callers re-run it on every mutating request and never reuse a prior
//! decision, so a stale UI snapshot can never authorize anything by itself.

use crate::domain::value_objects::{AuthorizedPath, PathRejection, RootSet, StorePath};

/// Authorize a candidate path against the allowed-root set.
///
/// The candidate's first segment must name a configured root exactly; the
/// remainder is the path within that root and must be non-empty (the root
/// itself is never a deletable target). Traversal, absolute and malformed
/// inputs are rejected before any root matching happens.
pub fn authorize(candidate: &str, roots: &RootSet) -> Result<AuthorizedPath, PathRejection> {
    let parsed = StorePath::parse(candidate)?;

    let root = roots
        .by_name(parsed.first_segment())
        .ok_or_else(|| PathRejection::OutsideRoots {
            candidate: parsed.as_str().to_string(),
        })?;

    let relative = parsed.remainder().ok_or_else(|| PathRejection::IsDirectory {
        candidate: parsed.as_str().to_string(),
    })?;

    let authorized = AuthorizedPath::new(root, relative);

    // StorePath construction already forbids traversal, so the join above
    // cannot escape; this keeps the containment invariant checked in one
    // place should the construction rules ever loosen.
    if !authorized.absolute().starts_with(root.path()) || authorized.absolute() == root.path() {
        return Err(PathRejection::OutsideRoots {
            candidate: parsed.as_str().to_string(),
        });
    }

    Ok(authorized)
}
