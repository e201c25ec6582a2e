//! Project and task lifecycle management.
//!
//! Projects move from draft to active once they own at least one task, and
//! tasks can only be completed while their project is active. Deleting a
//! project soft-deletes every task it owns in the same commit. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Lifecycle and query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
