//! Complete trees for the agent archetypes.
//!
//! Each preset composes the subtree layers into one ready-to-tick
//! [`BehaviorTree`] over a validated blackboard. One engine serves every
//! archetype; the presets differ only in how they wire the shared
//! composites and leaves.
//!
//! # Usage
//!
//! ```rust,ignore
//! use agent_ai::{AgentContext, presets};
//!
//! let ctx = AgentContext::builder()
//!     .navigation(nav)
//!     .animation(animator)
//!     .weapon(weapon)
//!     .entity(entity)
//!     .waypoints(route)
//!     .build()?;
//! let mut tree = presets::grunt(ctx)?;
//!
//! // Once per frame:
//! tree.blackboard_mut().apply_percept(percept);
//! tree.tick();
//! ```

use behavior_tree::BehaviorTree;
use behavior_tree::builder::{branch, dispatch, selector};

use crate::blackboard::{AgentContext, BossContext};
use crate::errors::{AgentError, Result};
use crate::nodes::Deactivate;
use crate::phase::BossPhase;
use crate::subtrees::{patterns, tactics};

/// Rank-and-file enemy: patrols a route, engages on sight, backtracks
/// after a kill.
///
/// # Behavior
///
/// 1. Dead: terminal deactivation
/// 2. Stunned: recovery countdown
/// 3. Target down: walk back to spawn
/// 4. Target sighted with the weapon ready: chase and attack
/// 5. Otherwise: pause at waypoints, walk the route
///
/// # Errors
///
/// Fails with [`AgentError::EmptyPatrolRoute`] when the context carries
/// no waypoints; the patrol leg is not optional for this archetype.
pub fn grunt(ctx: AgentContext) -> Result<BehaviorTree<AgentContext>> {
    if ctx.waypoints.is_empty() {
        return Err(AgentError::EmptyPatrolRoute);
    }

    let root = branch(
        |c: &AgentContext| c.dead,
        Box::new(Deactivate::default()),
        branch(
            |c: &AgentContext| c.stunned,
            patterns::recover_from_stun(),
            selector(vec![
                patterns::backtrack_when_target_dead(),
                patterns::engage_when_spotted(tactics::chase_or_attack()),
                patterns::idle_or_patrol(),
            ]),
        ),
    );

    tracing::debug!(
        waypoints = ctx.waypoints.len(),
        "grunt behavior tree built"
    );
    Ok(BehaviorTree::new(root, ctx))
}

/// Boss: one subtree per fight phase, selected by the phase field the
/// boss entity's external logic maintains.
///
/// # Behavior
///
/// - `Entry`: open-arena chase and attack behind the engage gate
/// - `RoomTwo`: ambush from cover, one shot per pop-out
/// - `RoomThree`: hunt from cover, pursuing any sighting
/// - `Stunned`: recovery countdown; the stun-end notification lets the
///   external logic move the phase on
///
/// A phase with no subtree wired dispatches to nothing and the tick is
/// inert. Hide spots are validated by [`BossContext::new`], so
/// construction here cannot fail.
pub fn boss(ctx: BossContext) -> BehaviorTree<BossContext> {
    let root = branch(
        |c: &BossContext| c.agent.dead,
        Box::new(Deactivate::default()),
        dispatch(
            |c: &BossContext| c.phase,
            vec![
                (
                    BossPhase::Entry,
                    patterns::engage_when_spotted(tactics::chase_or_attack()),
                ),
                (BossPhase::RoomTwo, tactics::ambush_from_cover()),
                (BossPhase::RoomThree, tactics::hunt_from_cover()),
                (BossPhase::Stunned, patterns::recover_from_stun()),
            ],
        ),
    );

    tracing::debug!(hide_spots = ctx.hide_spots.len(), "boss behavior tree built");
    BehaviorTree::new(root, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{agent_context, recorder};
    use behavior_tree::Status;
    use glam::Vec3;

    #[test]
    fn grunt_requires_a_patrol_route() {
        let (rec, _) = recorder();
        let ctx = agent_context(rec);

        assert!(matches!(grunt(ctx), Err(AgentError::EmptyPatrolRoute)));
    }

    #[test]
    fn idle_grunt_walks_its_route() {
        let (rec, state) = recorder();
        let mut ctx = agent_context(rec);
        ctx.waypoints = vec![Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 10.0)];
        ctx.can_shoot = true;

        let mut tree = grunt(ctx).unwrap();
        assert_eq!(tree.tick(), Status::Claimed);

        let patrol_speed = tree.blackboard().config.patrol_speed;
        assert_eq!(
            state.lock().unwrap().destinations,
            vec![(Vec3::new(10.0, 0.0, 0.0), patrol_speed)]
        );
    }
}
