//! Kinematic integration.
//!
//! Engine levels map linearly onto turn rate and forward speed. Ships
//! are clamped to the battlefield square; there is no collision
//! response, islands only matter to the sensor.

use glam::DVec2;
use hecs::World;

use broadside_core::components::{Health, Heading};
use broadside_core::constants::{
    BATTLEFIELD_HALF_EXTENT, DT, SPEED_PER_LEVEL, TURN_RATE_PER_LEVEL,
};
use broadside_core::types::{wrap_heading_deg, Position};
use broadside_helm::engine::Engine;

pub fn run(world: &mut World) {
    for (_entity, (pos, heading, health, engine)) in world
        .query::<(&mut Position, &mut Heading, &Health, &mut Engine)>()
        .iter()
    {
        if health.is_destroyed() {
            continue;
        }

        heading.degrees = wrap_heading_deg(
            heading.degrees + engine.steer_level() as f64 * TURN_RATE_PER_LEVEL * DT,
        );

        let rad = heading.degrees.to_radians();
        let velocity =
            DVec2::new(rad.sin(), rad.cos()) * engine.speed_level() as f64 * SPEED_PER_LEVEL;
        pos.x = (pos.x + velocity.x * DT).clamp(-BATTLEFIELD_HALF_EXTENT, BATTLEFIELD_HALF_EXTENT);
        pos.y = (pos.y + velocity.y * DT).clamp(-BATTLEFIELD_HALF_EXTENT, BATTLEFIELD_HALF_EXTENT);

        engine.burn(DT);
    }
}
