//! Action nodes.
//!
//! Action nodes flip blackboard flags and issue fire-and-forget commands
//! to the engine collaborators. Leaves that move the agent follow one
//! policy throughout: claim while en route, perform arrival side effects
//! and pass on the arrival tick, so the tick falls through to the next
//! candidate in the same frame.

use behavior_tree::{Behavior, Status};

use crate::blackboard::{AgentView, BossContext};
use crate::engine::AnimFlag;

/// Closes distance to the sensed target.
///
/// Claims while out of weapon range, steering toward the last known
/// target position at chase speed. Once within range it halts, drops the
/// locomotion blend and passes, handing the tick to the attack sibling.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::Selector;
/// use agent_ai::nodes::{AttackTarget, ChaseTarget};
///
/// // Pursue while out of range, attack once in range
/// Selector::new(vec![
///     Box::new(ChaseTarget),
///     Box::new(AttackTarget),
/// ])
/// ```
pub struct ChaseTarget;

impl<C: AgentView> Behavior<C> for ChaseTarget {
    fn run(&mut self, ctx: &mut C) -> Status {
        let agent = ctx.agent_mut();

        if agent.within_weapon_range() {
            agent.nav_mut().stop();
            agent.animation_mut().set_flag(AnimFlag::Walking, false);
            return Status::Pass;
        }

        let destination = agent.target_position;
        let speed = agent.config.chase_speed;
        agent.nav_mut().set_destination(destination, speed);
        agent.animation_mut().set_flag(AnimFlag::Walking, true);
        agent.animation_mut().set_flag(AnimFlag::Attacking, false);
        Status::Claimed
    }
}

/// Fires at the target and claims the tick.
///
/// Range and readiness are the concern of the surrounding composites
/// (`ChaseTarget` yields only once in range; the engage gate holds fire
/// while `can_shoot` is down), so this leaf just plants the agent and
/// pulls the trigger. Exactly one fire command per tick.
pub struct AttackTarget;

impl<C: AgentView> Behavior<C> for AttackTarget {
    fn run(&mut self, ctx: &mut C) -> Status {
        let agent = ctx.agent_mut();
        let at = agent.target_position;

        agent.nav_mut().stop();
        agent.animation_mut().set_flag(AnimFlag::Walking, false);
        agent.animation_mut().set_flag(AnimFlag::Attacking, true);
        agent.weapon_mut().fire(at);
        tracing::debug!(?at, "fire");
        Status::Claimed
    }
}

/// Walks the patrol route, one waypoint at a time.
///
/// Claims while walking toward `waypoints[waypoint_index]`. Within arrive
/// tolerance it advances the index with wraparound, arms the waypoint
/// pause for [`Idle`], halts and passes.
pub struct Patrol;

impl<C: AgentView> Behavior<C> for Patrol {
    fn run(&mut self, ctx: &mut C) -> Status {
        let agent = ctx.agent_mut();
        if agent.waypoints.is_empty() {
            return Status::Pass;
        }

        let waypoint = agent.waypoints[agent.waypoint_index];
        if agent.position().distance(waypoint) <= agent.config.arrive_tolerance {
            agent.waypoint_index = (agent.waypoint_index + 1) % agent.waypoints.len();
            agent.idle_ticks_left = agent.config.idle_ticks;
            agent.nav_mut().stop();
            agent.animation_mut().set_flag(AnimFlag::Walking, false);
            return Status::Pass;
        }

        let speed = agent.config.patrol_speed;
        agent.nav_mut().set_destination(waypoint, speed);
        agent.animation_mut().set_flag(AnimFlag::Walking, true);
        Status::Claimed
    }
}

/// Burns down the waypoint pause armed by [`Patrol`].
///
/// Claims while ticks remain, passes otherwise. Placed ahead of `Patrol`
/// in the idle/patrol priority pair so an armed pause always wins the
/// tick.
pub struct Idle;

impl<C: AgentView> Behavior<C> for Idle {
    fn run(&mut self, ctx: &mut C) -> Status {
        let agent = ctx.agent_mut();
        if agent.idle_ticks_left == 0 {
            return Status::Pass;
        }
        agent.idle_ticks_left -= 1;
        Status::Claimed
    }
}

/// Redirects the agent to its cached spawn position after a kill.
///
/// Runs behind [`TargetIsDead`](crate::nodes::TargetIsDead) in a
/// sequence: issues the move command, clears the target-dead flag and
/// claims. One tick is enough; ordinary patrol takes over from there.
pub struct ReturnToSpawn;

impl<C: AgentView> Behavior<C> for ReturnToSpawn {
    fn run(&mut self, ctx: &mut C) -> Status {
        let agent = ctx.agent_mut();
        let spawn = agent.spawn_position;
        let speed = agent.config.patrol_speed;

        agent.target_dead = false;
        agent.nav_mut().set_destination(spawn, speed);
        agent.animation_mut().set_flag(AnimFlag::Walking, true);
        agent.animation_mut().set_flag(AnimFlag::Attacking, false);
        tracing::debug!(?spawn, "target down, backtracking to spawn");
        Status::Claimed
    }
}

/// Counts a stun down and clears it on expiry.
///
/// The countdown is armed from `config.stun_ticks` on the first stunned
/// tick and lives in the node, not the blackboard. The leaf claims while
/// counting; on the expiry tick it clears the stunned flag and the
/// stagger animation, notifies the entity system, optionally re-arms
/// `target_found` (attack-after-stun), and passes exactly once. It is not
/// re-entered until the agent is stunned again.
#[derive(Default)]
pub struct StunRecovery {
    remaining: Option<u32>,
}

impl<C: AgentView> Behavior<C> for StunRecovery {
    fn run(&mut self, ctx: &mut C) -> Status {
        let agent = ctx.agent_mut();
        if !agent.stunned {
            self.remaining = None;
            return Status::Pass;
        }

        let remaining = self.remaining.get_or_insert(agent.config.stun_ticks);
        if *remaining > 1 {
            *remaining -= 1;
            return Status::Claimed;
        }

        self.remaining = None;
        agent.stunned = false;
        agent.animation_mut().set_flag(AnimFlag::Stunned, false);
        agent.entity_mut().stun_ended();
        if agent.attack_after_stun {
            agent.attack_after_stun = false;
            agent.target_found = true;
        }
        tracing::debug!("stun expired");
        Status::Pass
    }
}

/// Terminal dead behavior.
///
/// The first tick halts movement, raises the death pose and notifies the
/// entity system once; every tick claims, so nothing below the dead
/// branch ever runs again.
#[derive(Default)]
pub struct Deactivate {
    notified: bool,
}

impl<C: AgentView> Behavior<C> for Deactivate {
    fn run(&mut self, ctx: &mut C) -> Status {
        if !self.notified {
            self.notified = true;
            let agent = ctx.agent_mut();
            agent.nav_mut().stop();
            agent.animation_mut().set_flag(AnimFlag::Dead, true);
            agent.entity_mut().died();
            tracing::debug!("agent dead, tree deactivated");
        }
        Status::Claimed
    }
}

// ============================================================================
// Boss cover fight
// ============================================================================

/// Moves the boss to its current hide spot.
///
/// Claims while running to cover; on arrival sets `hiding`, halts and
/// passes. While already hiding it passes immediately, leaving the tick
/// to the ambush branch.
pub struct MoveToHideSpot;

impl Behavior<BossContext> for MoveToHideSpot {
    fn run(&mut self, ctx: &mut BossContext) -> Status {
        if ctx.hiding {
            return Status::Pass;
        }

        let spot = ctx.current_hide_spot();
        if ctx.agent.position().distance(spot) <= ctx.agent.config.arrive_tolerance {
            ctx.hiding = true;
            ctx.agent.nav_mut().stop();
            ctx.agent.animation_mut().set_flag(AnimFlag::Walking, false);
            tracing::debug!(?spot, "boss reached cover");
            return Status::Pass;
        }

        let speed = ctx.agent.config.chase_speed;
        ctx.agent.nav_mut().set_destination(spot, speed);
        ctx.agent.animation_mut().set_flag(AnimFlag::Walking, true);
        Status::Claimed
    }
}

/// Leaves cover and lines up the next hide spot.
///
/// Cycles the hide-spot index with wraparound so the following retreat
/// picks a fresh position. Idempotent while already out of cover, so it
/// can sit at the head of an engage sequence that runs for several ticks.
pub struct BreakCover;

impl Behavior<BossContext> for BreakCover {
    fn run(&mut self, ctx: &mut BossContext) -> Status {
        if ctx.hiding {
            ctx.hiding = false;
            ctx.hide_spot_index = (ctx.hide_spot_index + 1) % ctx.hide_spots.len();
            tracing::debug!(next_spot = ctx.hide_spot_index, "boss breaking cover");
        }
        Status::Claimed
    }
}
