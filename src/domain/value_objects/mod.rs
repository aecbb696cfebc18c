//! Immutable value types

mod root;
mod store_path;

pub use root::{AllowedRoot, AuthorizedPath, RootSet};
pub use store_path::{PathRejection, StorePath};
