//! Port contracts for the workspace.
//!
//! Ports define infrastructure-agnostic interfaces used by workspace services.

pub mod notifier;
pub mod store;

pub use notifier::{Notification, Notifier};
pub use store::{ChangeSet, EntityStore, ProjectSnapshot, StoreError, StoreResult, Visibility};
