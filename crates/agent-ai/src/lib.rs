//! Enemy and boss AI built on frame-ticked behavior trees.
//!
//! This crate is the domain layer over the [`behavior_tree`] engine: it
//! defines the per-agent blackboards, the leaf nodes that read and write
//! them, and the complete archetype trees. The surrounding simulation
//! owns everything else; it reaches the tree through three narrow seams:
//!
//! - the engine-facing capability traits in [`engine`], implemented over
//!   the host's navigation, animation, combat and entity systems
//! - [`Percept`] application and flag setters on the blackboard, written
//!   between ticks by sensing and damage handling
//! - one synchronous `tick()` per agent per frame
//!
//! Modules are organized by responsibility:
//! - [`blackboard`] holds the agent and boss contexts and their builder
//! - [`engine`] declares the capability traits the host implements
//! - [`nodes`] provides the leaf conditions and actions
//! - [`subtrees`] layers leaves into reusable patterns and tactics
//! - [`presets`] assembles the complete per-archetype trees
//!
//! Construction is validated up front: a missing collaborator or an
//! unusable route is an [`AgentError`] at build time, never a silent
//! no-op at tick time.

pub mod blackboard;
pub mod config;
pub mod engine;
pub mod errors;
pub mod nodes;
pub mod phase;
pub mod presets;
pub mod subtrees;

#[cfg(test)]
pub(crate) mod testing;

pub use blackboard::{AgentContext, AgentContextBuilder, AgentView, BossContext, Percept};
pub use config::AgentConfig;
pub use engine::{AnimFlag, Animation, EntityEvents, Navigation, Weapon};
pub use errors::{AgentError, CollaboratorKind, Result};
pub use phase::BossPhase;
