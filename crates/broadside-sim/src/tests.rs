use broadside_core::commands::HostCommand;
use broadside_core::constants::{
    CRUISE_SPEED_LEVEL, MAIN_BATTERY_AMMO, MAX_HEALTH, TICK_RATE,
};
use broadside_core::enums::{BattlePhase, EngagementState};
use broadside_core::events::BattleEvent;
use broadside_core::state::{BattleSnapshot, UnitView};
use broadside_core::types::UnitId;

use crate::engine::{BattleEngine, SimConfig};

fn started_engine(seed: u64) -> BattleEngine {
    let mut engine = BattleEngine::new(SimConfig { seed });
    engine.queue_command(HostCommand::StartBattle);
    engine
}

fn unit(snapshot: &BattleSnapshot, id: u32) -> &UnitView {
    snapshot
        .units
        .iter()
        .find(|unit| unit.id == UnitId(id))
        .expect("unit should exist in snapshot")
}

#[test]
fn test_same_seed_same_commands_identical_snapshots() {
    let mut a = started_engine(7);
    let mut b = started_engine(7);

    for _ in 0..300 {
        a.tick();
        b.tick();
    }
    let last_a = a.tick();
    let last_b = b.tick();

    let json_a = serde_json::to_string(&last_a).expect("snapshot serializes");
    let json_b = serde_json::to_string(&last_b).expect("snapshot serializes");
    assert_eq!(json_a, json_b);
}

#[test]
fn test_battle_starts_only_from_setup() {
    let mut engine = BattleEngine::new(SimConfig::default());
    assert_eq!(engine.phase(), BattlePhase::Setup);

    engine.queue_command(HostCommand::StartBattle);
    let snapshot = engine.tick();
    assert_eq!(snapshot.phase, BattlePhase::Active);
    assert_eq!(snapshot.units.len(), 4);

    // A second StartBattle must not respawn the fleets.
    engine.queue_command(HostCommand::StartBattle);
    let snapshot = engine.tick();
    assert_eq!(snapshot.units.len(), 4);
}

#[test]
fn test_pause_freezes_time_and_motion() {
    let mut engine = started_engine(3);
    for _ in 0..29 {
        engine.tick();
    }
    let mut snapshot = engine.tick();
    let running_tick = snapshot.time.tick;
    let running_pos = unit(&snapshot, 0).position;

    engine.queue_command(HostCommand::Pause);
    for _ in 0..30 {
        snapshot = engine.tick();
    }
    assert_eq!(snapshot.phase, BattlePhase::Paused);
    assert_eq!(snapshot.time.tick, running_tick);
    let paused_pos = unit(&snapshot, 0).position;
    assert_eq!(paused_pos.x, running_pos.x);
    assert_eq!(paused_pos.y, running_pos.y);

    engine.queue_command(HostCommand::Resume);
    for _ in 0..30 {
        snapshot = engine.tick();
    }
    assert_eq!(snapshot.phase, BattlePhase::Active);
    assert!(snapshot.time.tick > running_tick);
}

#[test]
fn test_patrolling_ship_reaches_cruise_and_closes_on_station() {
    let mut engine = started_engine(11);
    let first = engine.tick();
    let start_pos = unit(&first, 0).position;
    // Patrol stations sit at y = -150 for the southern team.
    let initial_offset = (start_pos.y - (-150.0)).abs();

    for _ in 0..9 {
        engine.tick();
    }
    let mut snapshot = engine.tick();
    assert_eq!(unit(&snapshot, 0).speed_level, CRUISE_SPEED_LEVEL);

    for _ in 0..(30 * TICK_RATE as usize) {
        snapshot = engine.tick();
    }
    let final_offset = (unit(&snapshot, 0).position.y - (-150.0)).abs();
    assert!(
        final_offset < initial_offset - 50.0,
        "ship should have closed on its patrol station: started {initial_offset:.1}m out, now {final_offset:.1}m"
    );
}

#[test]
fn test_stalking_ship_engages_and_sinks_target() {
    let mut engine = started_engine(5);
    engine.queue_command(HostCommand::SetEngagementState {
        unit: UnitId(0),
        state: EngagementState::Stalk,
    });
    engine.queue_command(HostCommand::AssignTarget {
        unit: UnitId(0),
        target: Some(UnitId(2)),
    });

    let mut saw_shot = false;
    let mut saw_sunk = false;
    let mut snapshot = engine.tick();
    for _ in 0..(120 * TICK_RATE as usize) {
        for event in &snapshot.events {
            match event {
                BattleEvent::ShotFired { unit, target } => {
                    assert_eq!(*unit, UnitId(0));
                    assert_eq!(*target, UnitId(2));
                    saw_shot = true;
                }
                BattleEvent::UnitDestroyed { unit } if *unit == UnitId(2) => {
                    saw_sunk = true;
                }
                _ => {}
            }
        }
        if saw_sunk {
            break;
        }
        snapshot = engine.tick();
    }

    assert!(saw_shot, "stalker should have opened fire");
    assert!(saw_sunk, "target should have been sunk");
    let target = unit(&snapshot, 2);
    assert!(target.destroyed);
    assert_eq!(target.health, 0.0);
    assert!(unit(&snapshot, 0).ammo < MAIN_BATTERY_AMMO);
}

#[test]
fn test_destroyed_ship_stops_and_reset_restores_it() {
    let mut engine = started_engine(13);
    let first = engine.tick();
    let start_pos = unit(&first, 1).position;
    let start_heading = unit(&first, 1).heading_deg;

    for _ in 0..60 {
        engine.tick();
    }
    engine.queue_command(HostCommand::ApplyDamage {
        unit: UnitId(1),
        amount: MAX_HEALTH,
    });
    let snapshot = engine.tick();
    assert!(snapshot
        .events
        .iter()
        .any(|event| matches!(event, BattleEvent::UnitDestroyed { unit } if *unit == UnitId(1))));
    let wreck = unit(&snapshot, 1);
    assert!(wreck.destroyed);
    assert_eq!(wreck.speed_level, 0);
    assert_eq!(wreck.steer_level, 0);

    let wreck_pos = wreck.position;
    for _ in 0..60 {
        engine.tick();
    }
    let snapshot = engine.tick();
    let still = unit(&snapshot, 1);
    assert_eq!(still.position.x, wreck_pos.x);
    assert_eq!(still.position.y, wreck_pos.y);

    engine.queue_command(HostCommand::ResetUnit { unit: UnitId(1) });
    let snapshot = engine.tick();
    let restored = unit(&snapshot, 1);
    assert!(!restored.destroyed);
    assert_eq!(restored.health, MAX_HEALTH);
    assert_eq!(restored.ammo, MAIN_BATTERY_AMMO);
    assert_eq!(restored.state, EngagementState::Patrol);
    assert!(restored.target.is_none());
    assert!(!restored.detected);
    // Back at the starting berth. The reset tick itself runs systems,
    // so allow one tick of drift.
    assert!((restored.position.x - start_pos.x).abs() < 1.0);
    assert!((restored.position.y - start_pos.y).abs() < 1.0);
    assert!((restored.heading_deg - start_heading).abs() < 3.0);
}

#[test]
fn test_detection_flag_round_trips_through_snapshot() {
    let mut engine = started_engine(1);
    engine.tick();

    engine.queue_command(HostCommand::SetDetected {
        unit: UnitId(3),
        detected: true,
    });
    let snapshot = engine.tick();
    assert!(unit(&snapshot, 3).detected);
    assert!(!unit(&snapshot, 2).detected);

    engine.queue_command(HostCommand::SetDetected {
        unit: UnitId(3),
        detected: false,
    });
    let snapshot = engine.tick();
    assert!(!unit(&snapshot, 3).detected);
}

#[test]
fn test_commands_for_unknown_units_are_ignored() {
    let mut engine = started_engine(1);
    engine.tick();

    engine.queue_command(HostCommand::ApplyDamage {
        unit: UnitId(99),
        amount: 5.0,
    });
    engine.queue_command(HostCommand::ResetUnit { unit: UnitId(99) });
    let snapshot = engine.tick();
    assert_eq!(snapshot.units.len(), 4);
    assert!(snapshot.events.is_empty());
}

#[test]
fn test_sensor_trace_published_in_snapshot() {
    let mut engine = started_engine(9);
    for _ in 0..5 {
        engine.tick();
    }
    let snapshot = engine.tick();
    for unit in &snapshot.units {
        for reading in unit.sensor {
            assert!((0.0..=1.0).contains(&reading));
        }
    }
    // Fleet mates spawn 200m apart, inside sensor range, so at least
    // one ray per ship reads below the clear-water value.
    assert!(unit(&snapshot, 0)
        .sensor
        .iter()
        .any(|&reading| reading < 1.0));
}
