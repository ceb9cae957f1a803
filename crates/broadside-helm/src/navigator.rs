//! Potential-field navigation.
//!
//! Steers toward an orbit waypoint on a circle around the navigation
//! target, bent away from nearby terrain and hulls by repulsive forces
//! accumulated from the sensor ring.

use glam::DVec2;

use broadside_core::constants::RAY_COUNT;
use broadside_core::enums::ContactKind;
use broadside_core::types::{heading_delta_deg, Position};

use crate::profiles::HelmProfile;
use crate::sensor::SensorReading;

/// A point to orbit plus the orbit radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationTarget {
    pub point: Position,
    pub radius: f64,
}

/// Which way to put the rudder over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerDirection {
    Left,
    Right,
}

/// One tick's steering output.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteerDelta {
    /// Set while below cruise speed: throttle up, steering skipped.
    pub throttle_up: bool,
    pub steer: Option<SteerDirection>,
}

/// Pick the orbit waypoint: of the two points where the line through the
/// target along the gap-vector gradient crosses the orbit circle, take
/// the one nearer to the current position. Approaching a waypoint on the
/// circle rather than the target itself produces an encircling course.
pub fn orbit_waypoint(position: &Position, target: &NavigationTarget) -> Position {
    let p = position.horizontal();
    let t = target.point.horizontal();
    let gap = p - t;

    // gradient = Δy/Δx of the gap; a vertical gap (Δx = 0) degenerates
    // to a due-north offset, the limit of the construction.
    let offset = if gap.x.abs() < f64::EPSILON {
        DVec2::new(0.0, target.radius)
    } else {
        let gradient = gap.y / gap.x;
        let x = (target.radius * target.radius / (gradient * gradient + 1.0)).sqrt();
        DVec2::new(x, gradient * x)
    };

    let plus = t + offset;
    let minus = t - offset;
    let waypoint = if p.distance_squared(plus) < p.distance_squared(minus) {
        plus
    } else {
        minus
    };
    Position::from_horizontal(waypoint)
}

/// Accumulate repulsive force from this tick's sensor contacts.
///
/// Terrain inside the near threshold repels linearly; other hulls repel
/// with an inverse-square falloff that grows sharply at close range.
fn repulsion(
    position: &Position,
    contacts: &[SensorReading; RAY_COUNT],
    profile: &HelmProfile,
) -> DVec2 {
    let p = position.horizontal();
    let mut force = DVec2::ZERO;

    for reading in contacts {
        match reading.kind {
            ContactKind::Terrain if reading.distance < profile.terrain_near_threshold => {
                force += (p - reading.hit_point.horizontal()) * profile.terrain_repulsion_weight;
            }
            ContactKind::Hostile => {
                let away = p - reading.hit_point.horizontal();
                let range = away.length();
                if range > f64::EPSILON {
                    let falloff = profile.hostile_repulsion_k / range;
                    force += away * (falloff * falloff);
                }
            }
            _ => {}
        }
    }

    force
}

/// Compute this tick's steering adjustment.
///
/// Below the cruise threshold the only output is throttle-up; a steering
/// correction computed against the old heading while nearly stationary
/// is too noisy to act on.
pub fn compute_steering(
    position: &Position,
    heading_deg: f64,
    speed_level: i8,
    target: &NavigationTarget,
    contacts: &[SensorReading; RAY_COUNT],
    profile: &HelmProfile,
) -> SteerDelta {
    if speed_level < profile.cruise_speed_level {
        return SteerDelta {
            throttle_up: true,
            steer: None,
        };
    }

    let p = position.horizontal();
    let waypoint = orbit_waypoint(position, target);
    let desired = waypoint.horizontal() - p;

    let force = repulsion(position, contacts, profile);
    let blended = if force == DVec2::ZERO {
        desired
    } else {
        // Directions blend unit-weighted; the magnitude stays the pure
        // attractive distance so crowding bends the course without
        // entering the speed policy.
        (desired.normalize_or_zero() + force.normalize_or_zero()).normalize_or_zero()
            * desired.length()
    };

    // Degenerate geometry (zero-length aim) is a valid no-op, never NaN.
    if blended.length_squared() < f64::EPSILON {
        return SteerDelta::default();
    }

    let aim = Position::from_horizontal(p + blended);
    let bearing = position.bearing_deg_to(&aim);
    let delta = heading_delta_deg(heading_deg, bearing);

    let steer = if delta > profile.steer_deadzone_deg {
        Some(SteerDirection::Left)
    } else if delta < -profile.steer_deadzone_deg {
        Some(SteerDirection::Right)
    } else {
        None
    };

    SteerDelta {
        throttle_up: false,
        steer,
    }
}
