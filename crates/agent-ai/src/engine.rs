//! Engine-facing capability traits.
//!
//! The tree's only boundary with the surrounding game engine is the small
//! set of traits in this module. Leaves issue fire-and-forget commands
//! through them; the tree never retries a failed call, and failure handling
//! is the implementor's responsibility. The host runtime implements these
//! over its navigation, animation, combat, and entity systems.

use glam::Vec3;

/// Boolean animation states the tree drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AnimFlag {
    /// Locomotion blend, on while the agent is moving.
    Walking,
    /// Firing stance.
    Attacking,
    /// Stagger loop while stunned.
    Stunned,
    /// Death pose, set once and never cleared by the tree.
    Dead,
}

/// Pathing and steering for one agent.
pub trait Navigation: Send + Sync {
    /// Returns the agent's current world position.
    fn position(&self) -> Vec3;

    /// Starts or redirects movement toward `destination` at `speed`.
    fn set_destination(&mut self, destination: Vec3, speed: f32);

    /// Halts movement immediately.
    fn stop(&mut self);
}

/// Animator state flags for one agent.
pub trait Animation: Send + Sync {
    /// Sets a boolean animation state.
    fn set_flag(&mut self, flag: AnimFlag, on: bool);
}

/// The agent's weapon. Readiness (`can_shoot`) is precomputed by the combat
/// system into the blackboard; the tree only pulls the trigger.
pub trait Weapon: Send + Sync {
    /// Triggers one fire sequence toward `at`.
    fn fire(&mut self, at: Vec3);
}

/// Notifications back to the entity/health system.
pub trait EntityEvents: Send + Sync {
    /// The stun countdown ran out this tick.
    fn stun_ended(&mut self);

    /// The agent entered its terminal dead behavior.
    fn died(&mut self);
}
