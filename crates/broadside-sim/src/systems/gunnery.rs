//! Fire resolution.
//!
//! Shots are hitscan: a granted fire request immediately applies shell
//! damage to the target. The battery gates on ammunition, cooldown,
//! and range; the helm's intent alone never fires a round.

use std::collections::HashMap;

use hecs::{Entity, World};

use broadside_core::components::{Health, MainBattery};
use broadside_core::constants::{
    DT, MAIN_BATTERY_COOLDOWN_SECS, MAIN_BATTERY_RANGE, SHELL_DAMAGE,
};
use broadside_core::events::BattleEvent;
use broadside_core::types::{Position, UnitId};
use broadside_helm::engine::Engine;

use crate::systems::FireRequest;

/// Advance battery cooldowns and resolve this tick's fire requests.
pub fn run(
    world: &mut World,
    registry: &HashMap<UnitId, Entity>,
    requests: Vec<FireRequest>,
    events: &mut Vec<BattleEvent>,
) {
    for (_entity, battery) in world.query::<&mut MainBattery>().iter() {
        battery.cooldown_secs = (battery.cooldown_secs - DT).max(0.0);
    }

    for request in requests {
        let Some(&target_entity) = registry.get(&request.target_id) else {
            continue;
        };

        let in_range = {
            let Ok(shooter_pos) = world.get::<&Position>(request.shooter) else {
                continue;
            };
            let Ok(target_pos) = world.get::<&Position>(target_entity) else {
                continue;
            };
            shooter_pos.horizontal_range_to(&target_pos) <= MAIN_BATTERY_RANGE
        };
        if !in_range {
            continue;
        }

        {
            let Ok(mut battery) = world.get::<&mut MainBattery>(request.shooter) else {
                continue;
            };
            if battery.ammo == 0 || battery.cooldown_secs > 0.0 {
                continue;
            }
            battery.ammo -= 1;
            battery.cooldown_secs = MAIN_BATTERY_COOLDOWN_SECS;
        }
        events.push(BattleEvent::ShotFired {
            unit: request.shooter_id,
            target: request.target_id,
        });

        let destroyed = {
            let Ok(mut health) = world.get::<&mut Health>(target_entity) else {
                continue;
            };
            if health.is_destroyed() {
                continue;
            }
            health.current = (health.current - SHELL_DAMAGE).max(0.0);
            health.is_destroyed()
        };
        events.push(BattleEvent::ShellHit {
            target: request.target_id,
            damage: SHELL_DAMAGE,
        });

        if destroyed {
            // A sinking ship loses way immediately.
            if let Ok(mut engine) = world.get::<&mut Engine>(target_entity) {
                engine.set_speed_level(0);
                engine.set_steer_level(0);
            }
            events.push(BattleEvent::UnitDestroyed {
                unit: request.target_id,
            });
        }
    }
}
