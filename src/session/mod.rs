//! Client session façade.
//!
//! The façade is the only boundary callers need: it accepts structured
//! [`Command`] values together with an explicit [`Session`], runs them through
//! the workspace services and returns flat records or an [`ErrorBody`].

mod actor;
mod command;
mod error;
mod facade;

pub use actor::Session;
pub use command::{Command, CommandOutcome, ProjectView, TaskView};
pub use error::{ErrorBody, ErrorKind};
pub use facade::SessionFacade;
