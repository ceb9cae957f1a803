//! Host commands sent to the simulation.
//!
//! The detection, damage, and lifecycle collaborators all talk to the
//! core through these; commands are queued and processed at the next
//! tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::EngagementState;
use crate::types::{Position, UnitId};

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    // --- Simulation control ---
    /// Spawn the battle world and start ticking.
    StartBattle,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Detection / acquisition collaborator ---
    /// Toggle a unit's detection flag.
    SetDetected { unit: UnitId, detected: bool },
    /// Assign (or clear) a unit's hostile target.
    AssignTarget {
        unit: UnitId,
        target: Option<UnitId>,
    },
    /// Drive a unit's patrol/stalk transition.
    SetEngagementState {
        unit: UnitId,
        state: EngagementState,
    },
    /// Assign the area point a unit loiters around while patrolling.
    SetPatrolArea { unit: UnitId, point: Position },

    // --- Damage collaborator ---
    /// Apply damage from an external impact event.
    ApplyDamage { unit: UnitId, amount: f64 },

    // --- Lifecycle collaborator ---
    /// Restore a unit to its starting pose with full health, patrol
    /// state, no target, detection off, and reset sub-components.
    ResetUnit { unit: UnitId },
}
