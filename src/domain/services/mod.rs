//! Domain Services
//!
//! Pure decision logic with no I/O dependencies.

mod authorize;

pub use authorize::authorize;
