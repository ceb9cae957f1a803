//! Initial battle layout.
//!
//! Two teams of two warships face each other across a channel of three
//! islands. Island radii and patrol point placement take a little
//! seeded jitter so runs differ across seeds but never within one.

use std::collections::HashMap;

use hecs::{Entity, World};
use rand::Rng;

use broadside_core::components::{
    Detection, Health, Heading, HelmOrders, Hull, MainBattery, Obstacle, SensorTrace,
    StartingPose, UnitTag, Warship,
};
use broadside_core::constants::{HULL_RADIUS, MAIN_BATTERY_AMMO, MAX_HEALTH};
use broadside_core::enums::{EngagementState, ShipClass};
use broadside_core::types::{Position, UnitId};
use broadside_helm::engine::Engine;

const ISLAND_LANES_X: [f64; 3] = [-350.0, 0.0, 350.0];

/// Populate the world with both fleets and terrain. Returns the unit
/// registry used to resolve ids to entities.
pub fn setup_battle(world: &mut World, rng: &mut impl Rng) -> HashMap<UnitId, Entity> {
    let mut registry = HashMap::new();

    for x in ISLAND_LANES_X {
        let radius = rng.gen_range(20.0..40.0);
        world.spawn((Obstacle { radius }, Position::new(x, 0.0, 0.0)));
    }

    let jitter_x = rng.gen_range(-20.0..20.0);
    let south_patrol = Position::new(jitter_x, -150.0, 0.0);
    let north_patrol = Position::new(-jitter_x, 150.0, 0.0);

    let roster = [
        (UnitId(0), 0, ShipClass::Destroyer, -100.0, -350.0, 0.0, south_patrol),
        (UnitId(1), 0, ShipClass::Corvette, 100.0, -350.0, 0.0, south_patrol),
        (UnitId(2), 1, ShipClass::Destroyer, -100.0, 350.0, 180.0, north_patrol),
        (UnitId(3), 1, ShipClass::Corvette, 100.0, 350.0, 180.0, north_patrol),
    ];

    for (id, team, class, x, y, heading_deg, patrol_point) in roster {
        let entity = spawn_warship(
            world,
            UnitTag { id, team, class },
            Position::new(x, y, 0.0),
            heading_deg,
            patrol_point,
        );
        registry.insert(id, entity);
    }

    registry
}

fn spawn_warship(
    world: &mut World,
    tag: UnitTag,
    position: Position,
    heading_deg: f64,
    patrol_point: Position,
) -> Entity {
    world.spawn((
        Warship,
        tag,
        position,
        Heading {
            degrees: heading_deg,
        },
        Health {
            current: MAX_HEALTH,
        },
        Detection::default(),
        Engine::default(),
        HelmOrders {
            state: EngagementState::Patrol,
            target: None,
            patrol_point: Some(patrol_point),
        },
        MainBattery {
            ammo: MAIN_BATTERY_AMMO,
            cooldown_secs: 0.0,
        },
        Hull {
            radius: HULL_RADIUS,
        },
        StartingPose {
            position,
            heading_deg,
        },
        SensorTrace::default(),
    ))
}
