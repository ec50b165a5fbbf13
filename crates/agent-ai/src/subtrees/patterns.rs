//! Small reusable patterns.
//!
//! Patterns pair one condition with one action, or wrap a subtree in a
//! single decorator. Naming follows the `action_when_condition()`
//! convention to keep the if-then relationship readable at the call site.

use behavior_tree::Behavior;
use behavior_tree::builder::{gate, selector, sequence};

use crate::blackboard::AgentView;
use crate::nodes::{Idle, Patrol, ReturnToSpawn, StunRecovery, TargetIsDead};

/// Walk back to spawn once the engaged target is down.
///
/// The condition claims while the target-dead flag is set; the action
/// redirects navigation and clears the flag, so this claims for exactly
/// one tick per kill.
pub fn backtrack_when_target_dead<C: AgentView + 'static>() -> Box<dyn Behavior<C>> {
    sequence(vec![Box::new(TargetIsDead), Box::new(ReturnToSpawn)])
}

/// Arm an engagement subtree behind the weapon gate and the sighting
/// trigger.
///
/// While the weapon is on cooldown the branch claims without running the
/// engagement, holding the agent in place mid-fight. With the weapon
/// ready, a sighted target forwards to the engagement and an empty
/// horizon yields the tick to lower-priority behavior.
pub fn engage_when_spotted<C: AgentView + 'static>(
    engagement: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    gate(
        |ctx: &C| ctx.agent().can_shoot,
        |ctx: &C| ctx.agent().target_found,
        engagement,
    )
}

/// Pause at waypoints, walk the route otherwise.
///
/// Priority pair: an armed waypoint pause always wins the tick, so the
/// patrol leg never starts until the pause has burned down.
pub fn idle_or_patrol<C: AgentView + 'static>() -> Box<dyn Behavior<C>> {
    selector(vec![Box::new(Idle), Box::new(Patrol)])
}

/// The stunned side of a stunned/normal branch.
pub fn recover_from_stun<C: AgentView + 'static>() -> Box<dyn Behavior<C>> {
    Box::new(StunRecovery::default())
}
