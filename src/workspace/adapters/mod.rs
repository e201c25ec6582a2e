//! Adapter implementations for workspace ports.

pub mod memory;
pub mod tracing_notifier;

pub use tracing_notifier::TracingNotifier;
