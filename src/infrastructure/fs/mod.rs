//! Backing-store implementations

mod local;

pub use local::LocalStore;
