//! Explicit session values carrying the authenticated actor.

use crate::workspace::domain::ActorId;

/// Caller identity passed into every façade call.
///
/// Authentication itself happens outside the crate; the façade only
/// distinguishes authenticated callers from anonymous ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Session {
    /// No authenticated actor; every command is rejected.
    #[default]
    Anonymous,
    /// Commands run on behalf of the given actor.
    Authenticated(ActorId),
}

impl Session {
    /// Creates an authenticated session.
    #[must_use]
    pub const fn authenticated(actor: ActorId) -> Self {
        Self::Authenticated(actor)
    }

    /// Returns the authenticated actor, if any.
    #[must_use]
    pub const fn actor(&self) -> Option<ActorId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(actor) => Some(*actor),
        }
    }
}
