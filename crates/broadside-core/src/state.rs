//! Battle state snapshot: the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::constants::RAY_COUNT;
use crate::enums::{BattlePhase, EngagementState, ShipClass};
use crate::events::BattleEvent;
use crate::types::{Position, SimTime, UnitId};

/// Complete battle state emitted after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: BattlePhase,
    pub units: Vec<UnitView>,
    pub events: Vec<BattleEvent>,
}

/// One warship's visible state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub team: u8,
    pub class: ShipClass,
    pub position: Position,
    /// Heading (degrees, 0 = North, clockwise).
    pub heading_deg: f64,
    pub speed_level: i8,
    pub steer_level: i8,
    pub fuel: f64,
    pub health: f64,
    pub destroyed: bool,
    pub detected: bool,
    pub state: EngagementState,
    pub target: Option<UnitId>,
    /// Main battery rounds remaining.
    pub ammo: u32,
    /// Last scan's normalized ray distances (1.0 = clear).
    pub sensor: [f64; RAY_COUNT],
}
