//! Per-class helm behavior profiles.
//!
//! Consolidates the tunable steering constants into one structure.
//! The two classes carry the two tuning sets observed in service;
//! neither is "the" correct one.

use broadside_core::constants::*;
use broadside_core::enums::ShipClass;

/// Tunable constants for one helm behavior profile.
#[derive(Debug, Clone)]
pub struct HelmProfile {
    /// Terrain hits closer than this contribute repulsion (meters).
    pub terrain_near_threshold: f64,
    /// Linear weight on terrain repulsion.
    pub terrain_repulsion_weight: f64,
    /// Inverse-square constant for repulsion from other hulls.
    pub hostile_repulsion_k: f64,
    /// Minimum speed level before steering corrections are applied.
    pub cruise_speed_level: i8,
    /// Angular dead-zone (degrees) preventing rudder oscillation.
    pub steer_deadzone_deg: f64,
    /// Loiter radius around the patrol area point (meters).
    pub patrol_orbit_radius: f64,
    /// Standoff radius when stalking a hostile (meters).
    /// Note: wider than the patrol loiter radius; inherited tuning, kept as-is.
    pub stalk_orbit_radius: f64,
    /// Main battery effective range (meters).
    pub fire_range: f64,
}

/// Get the helm profile for a ship class.
pub fn get_profile(class: ShipClass) -> HelmProfile {
    match class {
        ShipClass::Destroyer => HelmProfile {
            terrain_near_threshold: 40.0,
            terrain_repulsion_weight: 16.0,
            hostile_repulsion_k: HOSTILE_REPULSION_K,
            cruise_speed_level: CRUISE_SPEED_LEVEL,
            steer_deadzone_deg: STEER_DEADZONE_DEG,
            patrol_orbit_radius: PATROL_ORBIT_RADIUS,
            stalk_orbit_radius: STALK_ORBIT_RADIUS,
            fire_range: MAIN_BATTERY_RANGE,
        },
        ShipClass::Corvette => HelmProfile {
            terrain_near_threshold: 20.0,
            terrain_repulsion_weight: 2.0,
            hostile_repulsion_k: HOSTILE_REPULSION_K,
            cruise_speed_level: CRUISE_SPEED_LEVEL,
            steer_deadzone_deg: STEER_DEADZONE_DEG,
            patrol_orbit_radius: PATROL_ORBIT_RADIUS,
            stalk_orbit_radius: STALK_ORBIT_RADIUS,
            fire_range: MAIN_BATTERY_RANGE,
        },
    }
}
