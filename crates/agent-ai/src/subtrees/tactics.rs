//! Combat tactics.
//!
//! Tactics combine patterns and leaves into complete engagement
//! behaviors. The shared [`chase_or_attack`] runs on any agent; the cover
//! tactics below it are boss-only, built on the boss blackboard's hide
//! spots.

use behavior_tree::Behavior;
use behavior_tree::builder::{selector, sequence};

use crate::blackboard::{AgentView, BossContext};
use crate::nodes::{
    AttackTarget, BreakCover, ChaseTarget, MoveToHideSpot, WithinWeaponRange,
};
use crate::subtrees::patterns;

/// Close in while out of range, attack once in range.
///
/// The pursuit claims until its arrival tick, so the attack leaf only
/// ever fires with the target inside weapon range; arrival and the first
/// shot land in the same tick.
pub fn chase_or_attack<C: AgentView + 'static>() -> Box<dyn Behavior<C>> {
    selector(vec![Box::new(ChaseTarget), Box::new(AttackTarget)])
}

/// Fight from cover: hold a hide spot, pop out for a single shot when the
/// target walks into range, relocate.
///
/// The run to cover claims until arrival. Once hiding, a target in range
/// (with the weapon ready) breaks cover for exactly one shot; the next
/// tick the relocation to the freshly cycled hide spot takes over.
pub fn ambush_from_cover() -> Box<dyn Behavior<BossContext>> {
    selector(vec![
        Box::new(MoveToHideSpot),
        patterns::engage_when_spotted(sequence(vec![
            Box::new(WithinWeaponRange),
            Box::new(BreakCover),
            Box::new(AttackTarget),
        ])),
    ])
}

/// Hunt from cover: retreat to a hide spot while the target is lost, but
/// abandon cover and pursue the moment it is sighted.
///
/// The engage branch outranks the retreat, so a sighting interrupts the
/// run to cover immediately; with the weapon on cooldown the gate holds
/// the boss where it stands instead of letting it slip back into hiding.
pub fn hunt_from_cover() -> Box<dyn Behavior<BossContext>> {
    selector(vec![
        patterns::engage_when_spotted(sequence(vec![
            Box::new(BreakCover),
            chase_or_attack(),
        ])),
        Box::new(MoveToHideSpot),
    ])
}
