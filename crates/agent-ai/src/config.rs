//! Per-archetype tuning values.

/// Tuning values shared by every node in one agent's tree.
///
/// Time-based values are expressed in ticks (simulation frames), matching
/// the once-per-frame tick contract; the surrounding game converts from
/// seconds when it builds the agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// Distance at which the agent stops closing and starts attacking.
    pub weapon_range: f32,
    /// Distance at which a navigation target counts as reached.
    pub arrive_tolerance: f32,
    /// Movement speed while pursuing a target.
    pub chase_speed: f32,
    /// Movement speed while walking a patrol route.
    pub patrol_speed: f32,
    /// Stun duration, in ticks.
    pub stun_ticks: u32,
    /// Pause at each waypoint before walking on, in ticks.
    pub idle_ticks: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            weapon_range: 12.0,
            arrive_tolerance: 0.5,
            chase_speed: 5.0,
            patrol_speed: 2.5,
            stun_ticks: 180,
            idle_ticks: 90,
        }
    }
}
