//! Structured errors returned across the session boundary.

use crate::workspace::{domain::WorkspaceErrorKind, services::WorkspaceServiceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error category exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed input.
    ValidationError,
    /// Unknown or soft-deleted identifier.
    NotFound,
    /// State does not satisfy a precondition of the command.
    PreconditionFailed,
    /// Entity already in or past the requested state.
    InvalidTransition,
    /// The session carries no authenticated actor.
    Unauthenticated,
    /// Storage failure.
    Internal,
}

impl ErrorKind {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "ValidationError",
            Self::NotFound => "NotFound",
            Self::PreconditionFailed => "PreconditionFailed",
            Self::InvalidTransition => "InvalidTransition",
            Self::Unauthenticated => "Unauthenticated",
            Self::Internal => "Internal",
        }
    }

    /// Returns the HTTP status code a REST binding should use.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::ValidationError => 400,
            Self::Unauthenticated => 401,
            Self::NotFound => 404,
            Self::PreconditionFailed | Self::InvalidTransition => 409,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<WorkspaceErrorKind> for ErrorKind {
    fn from(kind: WorkspaceErrorKind) -> Self {
        match kind {
            WorkspaceErrorKind::Validation => Self::ValidationError,
            WorkspaceErrorKind::NotFound => Self::NotFound,
            WorkspaceErrorKind::PreconditionFailed => Self::PreconditionFailed,
            WorkspaceErrorKind::InvalidTransition => Self::InvalidTransition,
            WorkspaceErrorKind::Internal => Self::Internal,
        }
    }
}

/// `{kind, message}` error payload.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ErrorBody {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl ErrorBody {
    /// Creates an error payload.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Payload returned for sessions without an authenticated actor.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(ErrorKind::Unauthenticated, "authentication required")
    }
}

impl From<WorkspaceServiceError> for ErrorBody {
    fn from(err: WorkspaceServiceError) -> Self {
        Self::new(err.kind().into(), err.to_string())
    }
}

impl From<serde_json::Error> for ErrorBody {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::ValidationError, format!("malformed request: {err}"))
    }
}
