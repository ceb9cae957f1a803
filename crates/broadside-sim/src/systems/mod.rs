//! Per-tick systems, run in a fixed order by the battle engine:
//! helm (sense and decide), gunnery (resolve fire), movement
//! (integrate kinematics).

pub mod gunnery;
pub mod helm;
pub mod movement;
pub mod snapshot;

use broadside_core::types::UnitId;

/// A shot requested by a ship's helm this tick, resolved by gunnery.
pub struct FireRequest {
    pub shooter: hecs::Entity,
    pub shooter_id: UnitId,
    pub target_id: UnitId,
}
