//! Leaf nodes.
//!
//! Conditions read the blackboard and claim when their check holds;
//! actions mutate the blackboard and command the engine collaborators.
//! Shared leaves are generic over [`AgentView`](crate::AgentView) so the
//! same node types drive plain agents and bosses; the cover-fight leaves
//! at the bottom of [`actions`] are boss-only.

pub mod actions;
pub mod conditions;

pub use actions::{
    AttackTarget, BreakCover, ChaseTarget, Deactivate, Idle, MoveToHideSpot, Patrol,
    ReturnToSpawn, StunRecovery,
};
pub use conditions::{TargetIsDead, WithinWeaponRange};
