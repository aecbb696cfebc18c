//! Domain Layer
//!
//! The core of storekeep - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (TreeNode, AggregateStats)
//! - `value_objects/` - Immutable value types (StorePath, AllowedRoot, AuthorizedPath)
//! - `services/` - Pure decision logic (the path gate)
//! - `ports/` - Interface definitions for infrastructure (Storage, EventSink)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - The path gate is stateless; decisions are never cached
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
