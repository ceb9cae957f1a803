//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::types::UnitId;

/// Battle events carried on each tick's snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// A fire request was honored and a salvo left the battery.
    ShotFired { unit: UnitId, target: UnitId },
    /// A salvo struck its target.
    ShellHit { target: UnitId, damage: f64 },
    /// A unit's health reached zero.
    UnitDestroyed { unit: UnitId },
}
