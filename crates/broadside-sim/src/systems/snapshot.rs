//! Read-only snapshot construction for hosts and tests.

use hecs::World;

use broadside_core::components::{
    Detection, Health, Heading, HelmOrders, MainBattery, SensorTrace, UnitTag,
};
use broadside_core::enums::BattlePhase;
use broadside_core::events::BattleEvent;
use broadside_core::state::{BattleSnapshot, UnitView};
use broadside_core::types::{Position, SimTime};
use broadside_helm::engine::Engine;

pub fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: BattlePhase,
    events: Vec<BattleEvent>,
) -> BattleSnapshot {
    let mut units = Vec::new();
    for (
        _entity,
        (tag, pos, heading, health, engine, orders, detection, battery, trace),
    ) in world
        .query::<(
            &UnitTag,
            &Position,
            &Heading,
            &Health,
            &Engine,
            &HelmOrders,
            &Detection,
            &MainBattery,
            &SensorTrace,
        )>()
        .iter()
    {
        units.push(UnitView {
            id: tag.id,
            team: tag.team,
            class: tag.class,
            position: *pos,
            heading_deg: heading.degrees,
            speed_level: engine.speed_level(),
            steer_level: engine.steer_level(),
            fuel: engine.fuel(),
            health: health.current,
            destroyed: health.is_destroyed(),
            detected: detection.detected,
            state: orders.state,
            target: orders.target,
            ammo: battery.ammo,
            sensor: trace.normalized,
        });
    }
    // Entity iteration order is an implementation detail; sort so
    // snapshots are stable across runs.
    units.sort_by_key(|unit| unit.id);

    BattleSnapshot {
        time,
        phase,
        units,
        events,
    }
}
