//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Battle lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// World not yet spawned.
    #[default]
    Setup,
    Active,
    Paused,
}

/// Engagement behavior state of a single warship.
///
/// Transitions are driven by the host's detection/acquisition logic;
/// the helm only decides per-state behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngagementState {
    /// Loiter around the assigned area point. Weapons hold.
    #[default]
    Patrol,
    /// Orbit the assigned target at standoff range, firing when inside
    /// effective battery range.
    Stalk,
}

/// Classification of a sensor ray hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    /// Nothing within sensing range.
    #[default]
    None,
    /// Terrain surface (island, coastline).
    Terrain,
    /// Another unit's collision volume.
    Hostile,
}

/// Discrete maneuver command applied to the engine telegraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManeuverCommand {
    #[default]
    Idle,
    /// Speed level +1.
    Forward,
    /// Speed level -1.
    Backward,
    /// Steer level -1 (heading decreases).
    Left,
    /// Steer level +1 (heading increases).
    Right,
}

/// Discrete attack command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackCommand {
    #[default]
    Idle,
    /// Request one main battery salvo. The gunnery system may decline
    /// (reloading, out of ammo, out of range) without error.
    Fire,
}

/// Warship class; selects the helm behavior profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    /// Heavy profile: wide terrain avoidance, strong linear repulsion.
    #[default]
    Destroyer,
    /// Light profile: tight terrain avoidance, weak linear repulsion.
    Corvette,
}
