//! Error types surfaced at agent construction time.
//!
//! Trees are validated when they are built, not when they tick: a
//! misconfigured agent (missing collaborator, empty patrol route) is a
//! hard error up front rather than a silent no-op in the field.
use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{kind} collaborator not set")]
    CollaboratorNotSet { kind: CollaboratorKind },

    #[error("patrol route has no waypoints")]
    EmptyPatrolRoute,

    #[error("boss has no hide spots")]
    EmptyHideSpots,
}

/// The engine-facing collaborators an agent context must be wired with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollaboratorKind {
    Navigation,
    Animation,
    Weapon,
    Entity,
}

impl fmt::Display for CollaboratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CollaboratorKind::Navigation => "navigation",
            CollaboratorKind::Animation => "animation",
            CollaboratorKind::Weapon => "weapon",
            CollaboratorKind::Entity => "entity",
        };
        write!(f, "{}", label)
    }
}
