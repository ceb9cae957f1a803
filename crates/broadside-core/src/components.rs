//! ECS components for hecs entities.
//!
//! Components are plain data structs; decision logic lives in the helm
//! crate and mutation in the sim systems.

use serde::{Deserialize, Serialize};

use crate::constants::{HEALTH_EPSILON, RAY_COUNT};
use crate::enums::{EngagementState, ShipClass};
use crate::types::{Position, UnitId};

/// Marks an entity as a warship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Warship;

/// Registry identity of a unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitTag {
    pub id: UnitId,
    pub team: u8,
    pub class: ShipClass,
}

/// Current heading in degrees (0 = North, clockwise, kept in [0, 360)).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub degrees: f64,
}

/// Hull health. A unit is destroyed once health reaches (near) zero and
/// must no longer navigate or fire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
}

impl Health {
    pub fn is_destroyed(&self) -> bool {
        self.current <= HEALTH_EPSILON
    }
}

/// Hull collision radius for sensor raycasts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub radius: f64,
}

/// Circular terrain obstacle (island).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub radius: f64,
}

/// Externally toggled detection flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Detection {
    pub detected: bool,
}

/// Per-unit engagement orders, driven by host commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelmOrders {
    pub state: EngagementState,
    /// Currently assigned hostile target (registry id, never a live handle).
    pub target: Option<UnitId>,
    /// Area of interest to loiter around while patrolling.
    pub patrol_point: Option<Position>,
}

impl Default for HelmOrders {
    fn default() -> Self {
        Self {
            state: EngagementState::Patrol,
            target: None,
            patrol_point: None,
        }
    }
}

/// Starting pose, restored on unit reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StartingPose {
    pub position: Position,
    pub heading_deg: f64,
}

/// Main battery state: the weapons collaborator's readiness gating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MainBattery {
    pub ammo: u32,
    /// Remaining reload time; a salvo is honored only at 0.
    pub cooldown_secs: f64,
}

/// Last tick's normalized sensor ray distances (1.0 = no hit in range).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensorTrace {
    pub normalized: [f64; RAY_COUNT],
}

impl Default for SensorTrace {
    fn default() -> Self {
        Self {
            normalized: [1.0; RAY_COUNT],
        }
    }
}
