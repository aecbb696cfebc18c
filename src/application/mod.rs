//! Application Layer
//!
//! Use cases that orchestrate domain logic over the infrastructure ports.

pub mod delete;
pub mod enumerate;
