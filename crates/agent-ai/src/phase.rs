//! Boss fight phases.

/// Discrete stage of the boss fight, carried in the boss blackboard.
///
/// The phase selects which behavior subtree is active. It is mutated only
/// by the boss entity's external logic, in response to game events (room
/// transitions, the death-then-stun transition); no tree node writes it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BossPhase {
    /// Opening arena: straight chase-and-shoot engagement.
    #[default]
    Entry,
    /// Second room: fight from cover, one shot per ambush.
    RoomTwo,
    /// Third room: breaks cover and hunts once the target is spotted.
    RoomThree,
    /// Staggered; only the recovery countdown runs.
    Stunned,
}
