//! Sense-and-decide system.
//!
//! Each live warship scans its surroundings, builds a decision context,
//! and runs the pure helm core. Decisions are buffered during the read
//! phase and applied afterwards so queries never hold conflicting
//! borrows on the world.

use std::collections::HashMap;

use hecs::{Entity, World};

use broadside_core::components::{
    Health, Heading, HelmOrders, SensorTrace, UnitTag,
};
use broadside_core::enums::AttackCommand;
use broadside_core::types::{Position, UnitId};
use broadside_helm::engine::Engine;
use broadside_helm::fsm::{self, HelmCommands, HelmContext, TargetSnapshot};
use broadside_helm::sensor::{self, SensorReading};
use broadside_core::constants::RAY_COUNT;

use crate::spatial::WorldIndex;
use crate::systems::FireRequest;

struct Decision {
    entity: Entity,
    commands: HelmCommands,
    contacts: [SensorReading; RAY_COUNT],
    shooter_id: UnitId,
    target_id: Option<UnitId>,
}

/// Run one helm pass over every live warship. Returns the fire
/// requests for the gunnery system.
pub fn run(world: &mut World, registry: &HashMap<UnitId, Entity>) -> Vec<FireRequest> {
    let index = WorldIndex::build(world);

    let mut decisions = Vec::new();
    for (entity, (tag, pos, heading, health, engine, orders)) in world
        .query::<(&UnitTag, &Position, &Heading, &Health, &Engine, &HelmOrders)>()
        .iter()
    {
        if health.is_destroyed() {
            continue;
        }

        let view = index.viewed_by(tag.id);
        let contacts = sensor::scan(&view, pos, heading.degrees);

        let target = orders.target.and_then(|target_id| {
            let entity = registry.get(&target_id)?;
            let target_pos = world.get::<&Position>(*entity).ok()?;
            let target_health = world.get::<&Health>(*entity).ok()?;
            Some(TargetSnapshot {
                id: target_id,
                position: *target_pos,
                destroyed: target_health.is_destroyed(),
            })
        });

        let ctx = HelmContext {
            class: tag.class,
            state: orders.state,
            position: *pos,
            heading_deg: heading.degrees,
            speed_level: engine.speed_level(),
            target,
            patrol_point: orders.patrol_point,
            contacts,
        };
        let commands = fsm::decide(&ctx);

        decisions.push(Decision {
            entity,
            commands,
            contacts,
            shooter_id: tag.id,
            target_id: orders.target,
        });
    }

    let mut fire_requests = Vec::new();
    for decision in decisions {
        if let Ok(mut engine) = world.get::<&mut Engine>(decision.entity) {
            engine.apply(decision.commands.maneuver);
        }
        if let Ok(mut trace) = world.get::<&mut SensorTrace>(decision.entity) {
            for (slot, reading) in trace.normalized.iter_mut().zip(decision.contacts.iter()) {
                *slot = reading.normalized;
            }
        }
        if decision.commands.attack == AttackCommand::Fire {
            if let Some(target_id) = decision.target_id {
                fire_requests.push(FireRequest {
                    shooter: decision.entity,
                    shooter_id: decision.shooter_id,
                    target_id,
                });
            }
        }
    }
    fire_requests
}
