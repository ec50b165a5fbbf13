//! Condition nodes.
//!
//! Condition nodes check blackboard state and claim when the check holds.
//! They do not modify state or issue collaborator commands, so a sequence
//! can chain any number of them ahead of an action.

use behavior_tree::{Behavior, Status};

use crate::blackboard::AgentView;

/// Claims while the engaged target is flagged dead.
///
/// Chained ahead of [`ReturnToSpawn`](crate::nodes::ReturnToSpawn), which
/// performs the redirect and clears the flag.
pub struct TargetIsDead;

impl<C: AgentView> Behavior<C> for TargetIsDead {
    fn run(&mut self, ctx: &mut C) -> Status {
        if ctx.agent().target_dead {
            Status::Claimed
        } else {
            Status::Pass
        }
    }
}

/// Claims while a sensed target is within weapon range.
///
/// Gates attacks that must not start a pursuit, such as the boss's
/// shoot-from-cover ambush.
pub struct WithinWeaponRange;

impl<C: AgentView> Behavior<C> for WithinWeaponRange {
    fn run(&mut self, ctx: &mut C) -> Status {
        if ctx.agent().within_weapon_range() {
            Status::Claimed
        } else {
            Status::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{agent_context, recorder};
    use glam::Vec3;

    #[test]
    fn target_is_dead_follows_flag() {
        let (rec, _) = recorder();
        let mut ctx = agent_context(rec);

        assert_eq!(TargetIsDead.run(&mut ctx), Status::Pass);
        ctx.set_target_dead();
        assert_eq!(TargetIsDead.run(&mut ctx), Status::Claimed);
    }

    #[test]
    fn within_weapon_range_requires_found_target_in_range() {
        let (rec, _) = recorder();
        let mut ctx = agent_context(rec);
        ctx.target_position = Vec3::new(ctx.config.weapon_range + 1.0, 0.0, 0.0);
        ctx.target_found = true;

        assert_eq!(WithinWeaponRange.run(&mut ctx), Status::Pass);

        ctx.target_position = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(WithinWeaponRange.run(&mut ctx), Status::Claimed);

        ctx.target_found = false;
        assert_eq!(WithinWeaponRange.run(&mut ctx), Status::Pass);
    }
}
