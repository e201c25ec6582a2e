//! Taskdeck: project and task lifecycle management for a single user.
//!
//! Projects start as drafts, collect tasks, and become active once they own
//! at least one task. Tasks can only be completed while their project is
//! active, and deleting a project soft-deletes its tasks in the same commit.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and notifications
//! - **Adapters**: Concrete implementations of ports (in-memory, `tracing`)
//!
//! # Modules
//!
//! - [`workspace`]: Project/task domain, entity store, lifecycle and queries
//! - [`session`]: Command façade with explicit sessions and structured errors

pub mod session;
pub mod workspace;
