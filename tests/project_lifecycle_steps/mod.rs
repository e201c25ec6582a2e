//! Step definitions for project lifecycle scenarios.

pub mod then;
pub mod when;
pub mod world;
