//! Agent blackboards.
//!
//! An [`AgentContext`] is the per-agent mutable state store every node in
//! that agent's tree reads and writes. Exactly one context exists per
//! agent; the tree owns it and lends it into each tick. External systems
//! (sensing, damage handling, room transitions) write into it between
//! ticks through the owning tree's `blackboard_mut()`.
//!
//! [`BossContext`] extends the generic shape additively by embedding an
//! `AgentContext` and adding the boss-only fields; the shared leaves reach
//! the embedded core through [`AgentView`].

use glam::Vec3;

use crate::config::AgentConfig;
use crate::engine::{AnimFlag, Animation, EntityEvents, Navigation, Weapon};
use crate::errors::{AgentError, CollaboratorKind, Result};
use crate::phase::BossPhase;

/// Fresh perception for one frame, produced by the external sensing
/// component and applied before the tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Percept {
    /// Target world position, if a target is currently sensed.
    pub target: Option<Vec3>,
    /// Whether the weapon system reports the weapon off cooldown.
    pub can_shoot: bool,
}

/// Per-agent blackboard: collaborator handles, tuning, perception and
/// behavioral flags.
///
/// Fields fall into three groups. The collaborator handles and tuning are
/// fixed at construction; the perception flags are overwritten every frame
/// by the sensing component; the behavioral flags are flipped by tree
/// nodes and by external game events. No node owns any of this state
/// beyond short-lived local caches.
pub struct AgentContext {
    nav: Box<dyn Navigation>,
    animation: Box<dyn Animation>,
    weapon: Box<dyn Weapon>,
    entity: Box<dyn EntityEvents>,

    /// Tuning shared by every node in this agent's tree.
    pub config: AgentConfig,
    /// Position to fall back to when the target goes down; cached from the
    /// navigation system at construction.
    pub spawn_position: Vec3,
    /// Patrol route walked in order, wrapping at the end.
    pub waypoints: Vec<Vec3>,
    /// Index of the waypoint currently walked toward.
    pub waypoint_index: usize,
    /// Remaining pause at the current waypoint.
    pub idle_ticks_left: u32,

    // Perception, rewritten each frame by the sensing component.
    /// Last known target position; meaningful while `target_found`.
    pub target_position: Vec3,
    /// A target is currently sensed.
    pub target_found: bool,
    /// The engaged target has died and has not been dealt with yet.
    pub target_dead: bool,
    /// The weapon is off cooldown. While this is down mid-fight, the
    /// engage gate holds the agent in place instead of letting it wander.
    pub can_shoot: bool,

    // Behavioral state.
    /// The agent itself is dead.
    pub dead: bool,
    /// The agent is staggered; only the recovery countdown runs.
    pub stunned: bool,
    /// Re-arm `target_found` when the stun expires, so the agent resumes
    /// attacking immediately.
    pub attack_after_stun: bool,
}

impl std::fmt::Debug for AgentContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentContext")
            .field("config", &self.config)
            .field("spawn_position", &self.spawn_position)
            .field("waypoints", &self.waypoints)
            .field("waypoint_index", &self.waypoint_index)
            .field("idle_ticks_left", &self.idle_ticks_left)
            .field("target_position", &self.target_position)
            .field("target_found", &self.target_found)
            .field("target_dead", &self.target_dead)
            .field("can_shoot", &self.can_shoot)
            .field("dead", &self.dead)
            .field("stunned", &self.stunned)
            .field("attack_after_stun", &self.attack_after_stun)
            .finish_non_exhaustive()
    }
}

impl AgentContext {
    /// Starts building a context. All four collaborators are mandatory.
    pub fn builder() -> AgentContextBuilder {
        AgentContextBuilder::default()
    }

    /// The agent's current world position, as reported by navigation.
    pub fn position(&self) -> Vec3 {
        self.nav.position()
    }

    /// Distance from the agent to the last known target position.
    pub fn distance_to_target(&self) -> f32 {
        self.position().distance(self.target_position)
    }

    /// Whether the sensed target is within weapon range.
    pub fn within_weapon_range(&self) -> bool {
        self.target_found && self.distance_to_target() <= self.config.weapon_range
    }

    /// Applies one frame of perception before the tick.
    ///
    /// The last known target position is kept when the target drops out of
    /// view, so the tree can still navigate toward it.
    pub fn apply_percept(&mut self, percept: Percept) {
        if let Some(target) = percept.target {
            self.target_position = target;
        }
        self.target_found = percept.target.is_some();
        self.can_shoot = percept.can_shoot;
    }

    /// Marks the engaged target as killed. The backtrack leaf clears this
    /// again once it has redirected the agent.
    pub fn set_target_dead(&mut self) {
        self.target_dead = true;
        self.target_found = false;
    }

    /// Puts the agent into the stunned state.
    ///
    /// Movement is halted and the stagger animation raised here, so the
    /// tree only has to run the countdown. `attack_after` re-arms
    /// `target_found` on expiry.
    pub fn set_stunned(&mut self, attack_after: bool) {
        self.stunned = true;
        self.attack_after_stun = attack_after;
        self.nav.stop();
        self.animation.set_flag(AnimFlag::Stunned, true);
    }

    pub fn nav(&self) -> &dyn Navigation {
        &*self.nav
    }

    pub fn nav_mut(&mut self) -> &mut dyn Navigation {
        &mut *self.nav
    }

    pub fn animation_mut(&mut self) -> &mut dyn Animation {
        &mut *self.animation
    }

    pub fn weapon_mut(&mut self) -> &mut dyn Weapon {
        &mut *self.weapon
    }

    pub fn entity_mut(&mut self) -> &mut dyn EntityEvents {
        &mut *self.entity
    }
}

/// Builder for [`AgentContext`].
///
/// `build()` fails fast on a missing collaborator rather than letting a
/// half-wired agent tick against nothing.
#[derive(Default)]
pub struct AgentContextBuilder {
    navigation: Option<Box<dyn Navigation>>,
    animation: Option<Box<dyn Animation>>,
    weapon: Option<Box<dyn Weapon>>,
    entity: Option<Box<dyn EntityEvents>>,
    config: Option<AgentConfig>,
    spawn_position: Option<Vec3>,
    waypoints: Vec<Vec3>,
}

impl AgentContextBuilder {
    /// Set the navigation collaborator.
    pub fn navigation(mut self, nav: Box<dyn Navigation>) -> Self {
        self.navigation = Some(nav);
        self
    }

    /// Set the animation collaborator.
    pub fn animation(mut self, animation: Box<dyn Animation>) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Set the weapon collaborator.
    pub fn weapon(mut self, weapon: Box<dyn Weapon>) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Set the entity-events collaborator.
    pub fn entity(mut self, entity: Box<dyn EntityEvents>) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Set tuning values. Defaults to [`AgentConfig::default`].
    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the cached spawn position. Defaults to the navigation
    /// system's position at build time.
    pub fn spawn_position(mut self, spawn: Vec3) -> Self {
        self.spawn_position = Some(spawn);
        self
    }

    /// Set the patrol route.
    pub fn waypoints(mut self, waypoints: Vec<Vec3>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// Build the context, failing on any missing collaborator.
    pub fn build(self) -> Result<AgentContext> {
        let nav = self.navigation.ok_or(AgentError::CollaboratorNotSet {
            kind: CollaboratorKind::Navigation,
        })?;
        let animation = self.animation.ok_or(AgentError::CollaboratorNotSet {
            kind: CollaboratorKind::Animation,
        })?;
        let weapon = self.weapon.ok_or(AgentError::CollaboratorNotSet {
            kind: CollaboratorKind::Weapon,
        })?;
        let entity = self.entity.ok_or(AgentError::CollaboratorNotSet {
            kind: CollaboratorKind::Entity,
        })?;

        let spawn_position = self.spawn_position.unwrap_or_else(|| nav.position());

        Ok(AgentContext {
            nav,
            animation,
            weapon,
            entity,
            config: self.config.unwrap_or_default(),
            spawn_position,
            waypoints: self.waypoints,
            waypoint_index: 0,
            idle_ticks_left: 0,
            target_position: Vec3::ZERO,
            target_found: false,
            target_dead: false,
            can_shoot: false,
            dead: false,
            stunned: false,
            attack_after_stun: false,
        })
    }
}

/// Boss blackboard: the generic agent core plus fight-phase state.
///
/// The specialization is additive; nothing in the embedded core behaves
/// differently for a boss.
pub struct BossContext {
    /// The generic agent core; shared leaves operate on this.
    pub agent: AgentContext,
    /// Current fight phase; written only by the boss entity's external
    /// logic.
    pub phase: BossPhase,
    /// Cover positions cycled through while fighting from a room.
    pub hide_spots: Vec<Vec3>,
    /// Index of the cover position currently in use.
    pub hide_spot_index: usize,
    /// The boss has reached cover and is holding there.
    pub hiding: bool,
}

impl BossContext {
    /// Wraps an agent core into a boss blackboard.
    ///
    /// Fails fast when `hide_spots` is empty: every room phase navigates
    /// to a cover position.
    pub fn new(agent: AgentContext, hide_spots: Vec<Vec3>) -> Result<Self> {
        if hide_spots.is_empty() {
            return Err(AgentError::EmptyHideSpots);
        }
        Ok(Self {
            agent,
            phase: BossPhase::default(),
            hide_spots,
            hide_spot_index: 0,
            hiding: false,
        })
    }

    /// The cover position currently in use.
    pub fn current_hide_spot(&self) -> Vec3 {
        self.hide_spots[self.hide_spot_index]
    }

    /// Moves the fight to a new phase. Called by the boss entity's room
    /// transition and stun handling, never by tree nodes.
    pub fn set_phase(&mut self, phase: BossPhase) {
        tracing::debug!(from = %self.phase, to = %phase, "boss phase transition");
        self.phase = phase;
        self.hiding = false;
    }
}

/// Read/write access to the generic agent core of a blackboard.
///
/// Shared leaves are written against this trait so one node type drives
/// both plain agents and bosses.
pub trait AgentView {
    fn agent(&self) -> &AgentContext;
    fn agent_mut(&mut self) -> &mut AgentContext;
}

impl AgentView for AgentContext {
    fn agent(&self) -> &AgentContext {
        self
    }

    fn agent_mut(&mut self) -> &mut AgentContext {
        self
    }
}

impl AgentView for BossContext {
    fn agent(&self) -> &AgentContext {
        &self.agent
    }

    fn agent_mut(&mut self) -> &mut AgentContext {
        &mut self.agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubAnimation, StubEntity, StubNav, StubWeapon, recorder};

    #[test]
    fn build_fails_without_navigation() {
        let (rec, _) = recorder();
        let err = AgentContext::builder()
            .animation(Box::new(StubAnimation(rec.clone())))
            .weapon(Box::new(StubWeapon(rec.clone())))
            .entity(Box::new(StubEntity(rec)))
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            AgentError::CollaboratorNotSet {
                kind: CollaboratorKind::Navigation
            }
        ));
    }

    #[test]
    fn spawn_position_defaults_to_nav_position() {
        let (rec, state) = recorder();
        state.lock().unwrap().position = Vec3::new(3.0, 0.0, -1.0);

        let ctx = AgentContext::builder()
            .navigation(Box::new(StubNav(rec.clone())))
            .animation(Box::new(StubAnimation(rec.clone())))
            .weapon(Box::new(StubWeapon(rec.clone())))
            .entity(Box::new(StubEntity(rec)))
            .build()
            .unwrap();

        assert_eq!(ctx.spawn_position, Vec3::new(3.0, 0.0, -1.0));
    }

    #[test]
    fn percept_keeps_last_known_target_position() {
        let (rec, _) = recorder();
        let mut ctx = crate::testing::agent_context(rec);

        ctx.apply_percept(Percept {
            target: Some(Vec3::new(5.0, 0.0, 0.0)),
            can_shoot: true,
        });
        assert!(ctx.target_found);

        ctx.apply_percept(Percept {
            target: None,
            can_shoot: false,
        });
        assert!(!ctx.target_found);
        assert_eq!(ctx.target_position, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn set_stunned_halts_and_raises_stagger() {
        let (rec, state) = recorder();
        let mut ctx = crate::testing::agent_context(rec);

        ctx.set_stunned(true);

        assert!(ctx.stunned);
        assert!(ctx.attack_after_stun);
        let state = state.lock().unwrap();
        assert_eq!(state.stops, 1);
        assert!(state.flags.contains(&(AnimFlag::Stunned, true)));
    }

    #[test]
    fn boss_context_rejects_empty_hide_spots() {
        let (rec, _) = recorder();
        let agent = crate::testing::agent_context(rec);

        assert!(matches!(
            BossContext::new(agent, vec![]),
            Err(AgentError::EmptyHideSpots)
        ));
    }
}
