//! Terminal output for the CLI.

mod render;

pub use render::{format_bytes, render_forest, render_report};
