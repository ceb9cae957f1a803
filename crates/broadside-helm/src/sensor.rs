//! Directional range sensing.
//!
//! A fixed ring of rays is cast from the unit's position each tick.
//! Readings are recomputed from scratch on every scan; the sensor keeps
//! no memory between ticks. Absence of a hit is a normal result.

use broadside_core::constants::{
    BATTLEFIELD_HALF_EXTENT, RAY_COUNT, RAY_SPACING_DEG, SENSOR_MAX_RANGE,
};
use broadside_core::enums::ContactKind;
use broadside_core::types::Position;

/// A raycast hit reported by the spatial query collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit (meters).
    pub distance: f64,
    /// World-space hit point.
    pub point: Position,
    pub kind: ContactKind,
}

/// Spatial query seam, implemented by the host world (physics/terrain).
pub trait SpatialQuery {
    /// Cast a horizontal-plane ray and return the nearest hit within
    /// `max_range`, if any.
    fn raycast(&self, origin: &Position, bearing_deg: f64, max_range: f64) -> Option<RayHit>;
}

/// One directional reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub kind: ContactKind,
    /// Raw hit distance (meters); only meaningful when `kind != None`.
    pub distance: f64,
    /// Hit distance normalized by battlefield scale; 1.0 = clear.
    pub normalized: f64,
    /// World-space hit point; only meaningful when `kind != None`.
    pub hit_point: Position,
}

impl Default for SensorReading {
    fn default() -> Self {
        Self {
            kind: ContactKind::None,
            distance: SENSOR_MAX_RANGE,
            normalized: 1.0,
            hit_point: Position::default(),
        }
    }
}

/// Scan the fixed ring of directions relative to the current heading.
///
/// Direction `i` points at `heading + RAY_SPACING_DEG * i`. The reported
/// distance is normalized by battlefield scale (not raw ray range) so
/// downstream consumers see a scale-invariant signal.
pub fn scan<Q: SpatialQuery>(
    query: &Q,
    origin: &Position,
    heading_deg: f64,
) -> [SensorReading; RAY_COUNT] {
    let mut readings = [SensorReading::default(); RAY_COUNT];
    for (i, reading) in readings.iter_mut().enumerate() {
        let bearing = (heading_deg + RAY_SPACING_DEG * i as f64).rem_euclid(360.0);
        if let Some(hit) = query.raycast(origin, bearing, SENSOR_MAX_RANGE) {
            reading.kind = hit.kind;
            reading.distance = hit.distance;
            reading.normalized = hit.distance / (2.0 * BATTLEFIELD_HALF_EXTENT);
            reading.hit_point = hit.point;
        }
    }
    readings
}
