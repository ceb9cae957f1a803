//! The battle engine: command intake, system scheduling, snapshots.
//!
//! Hosts drive the engine by queueing [`HostCommand`]s and calling
//! [`BattleEngine::tick`] at the fixed tick rate. Every tick returns a
//! full [`BattleSnapshot`]; the engine itself never blocks or spawns
//! threads.

use std::collections::{HashMap, VecDeque};
use std::mem;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use broadside_core::commands::HostCommand;
use broadside_core::components::{
    Detection, Health, Heading, HelmOrders, MainBattery, SensorTrace, StartingPose,
};
use broadside_core::constants::{MAIN_BATTERY_AMMO, MAX_HEALTH};
use broadside_core::enums::{BattlePhase, EngagementState};
use broadside_core::events::BattleEvent;
use broadside_core::state::BattleSnapshot;
use broadside_core::types::{Position, SimTime, UnitId};
use broadside_helm::engine::Engine;

use crate::systems;
use crate::world_setup;

/// Engine configuration. The seed fixes every random draw, so two
/// engines with the same seed and command stream produce identical
/// snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

pub struct BattleEngine {
    world: World,
    time: SimTime,
    phase: BattlePhase,
    rng: ChaCha8Rng,
    registry: HashMap<UnitId, Entity>,
    command_queue: VecDeque<HostCommand>,
    events: Vec<BattleEvent>,
}

impl BattleEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: BattlePhase::Setup,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            registry: HashMap::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Queue a command for the next tick.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the battle by one tick and return the resulting snapshot.
    ///
    /// Commands queued since the last tick are applied first. Systems
    /// only run while the battle is active; a paused engine still
    /// processes commands and reports state.
    pub fn tick(&mut self) -> BattleSnapshot {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }

        if self.phase == BattlePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            mem::take(&mut self.events),
        )
    }

    fn run_systems(&mut self) {
        let fire_requests = systems::helm::run(&mut self.world, &self.registry);
        systems::gunnery::run(
            &mut self.world,
            &self.registry,
            fire_requests,
            &mut self.events,
        );
        systems::movement::run(&mut self.world);
    }

    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::StartBattle => {
                if self.phase == BattlePhase::Setup {
                    self.registry = world_setup::setup_battle(&mut self.world, &mut self.rng);
                    self.phase = BattlePhase::Active;
                }
            }
            HostCommand::Pause => {
                if self.phase == BattlePhase::Active {
                    self.phase = BattlePhase::Paused;
                }
            }
            HostCommand::Resume => {
                if self.phase == BattlePhase::Paused {
                    self.phase = BattlePhase::Active;
                }
            }
            HostCommand::SetDetected { unit, detected } => {
                let Some(&entity) = self.registry.get(&unit) else {
                    return;
                };
                if let Ok(mut detection) = self.world.get::<&mut Detection>(entity) {
                    detection.detected = detected;
                }
            }
            HostCommand::AssignTarget { unit, target } => {
                let Some(&entity) = self.registry.get(&unit) else {
                    return;
                };
                if let Ok(mut orders) = self.world.get::<&mut HelmOrders>(entity) {
                    orders.target = target;
                }
            }
            HostCommand::SetEngagementState { unit, state } => {
                let Some(&entity) = self.registry.get(&unit) else {
                    return;
                };
                if let Ok(mut orders) = self.world.get::<&mut HelmOrders>(entity) {
                    orders.state = state;
                }
            }
            HostCommand::SetPatrolArea { unit, point } => {
                let Some(&entity) = self.registry.get(&unit) else {
                    return;
                };
                if let Ok(mut orders) = self.world.get::<&mut HelmOrders>(entity) {
                    orders.patrol_point = Some(point);
                }
            }
            HostCommand::ApplyDamage { unit, amount } => self.apply_damage(unit, amount),
            HostCommand::ResetUnit { unit } => self.reset_unit(unit),
        }
    }

    fn apply_damage(&mut self, unit: UnitId, amount: f64) {
        let Some(&entity) = self.registry.get(&unit) else {
            return;
        };
        let destroyed = {
            let Ok(mut health) = self.world.get::<&mut Health>(entity) else {
                return;
            };
            if health.is_destroyed() {
                return;
            }
            health.current = (health.current - amount).max(0.0);
            health.is_destroyed()
        };
        if destroyed {
            if let Ok(mut engine) = self.world.get::<&mut Engine>(entity) {
                engine.set_speed_level(0);
                engine.set_steer_level(0);
            }
            self.events.push(BattleEvent::UnitDestroyed { unit });
        }
    }

    /// Restore a unit to its starting pose with full health and a fresh
    /// battery. Engagement orders revert to patrol; the patrol area
    /// itself is kept, so a reset ship resumes its original station.
    fn reset_unit(&mut self, unit: UnitId) {
        let Some(&entity) = self.registry.get(&unit) else {
            return;
        };
        let Ok(pose) = self.world.get::<&StartingPose>(entity).map(|pose| *pose) else {
            return;
        };

        if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
            *pos = pose.position;
        }
        if let Ok(mut heading) = self.world.get::<&mut Heading>(entity) {
            heading.degrees = pose.heading_deg;
        }
        if let Ok(mut health) = self.world.get::<&mut Health>(entity) {
            health.current = MAX_HEALTH;
        }
        if let Ok(mut orders) = self.world.get::<&mut HelmOrders>(entity) {
            orders.state = EngagementState::Patrol;
            orders.target = None;
        }
        if let Ok(mut detection) = self.world.get::<&mut Detection>(entity) {
            detection.detected = false;
        }
        if let Ok(mut engine) = self.world.get::<&mut Engine>(entity) {
            engine.reset();
        }
        if let Ok(mut battery) = self.world.get::<&mut MainBattery>(entity) {
            battery.ammo = MAIN_BATTERY_AMMO;
            battery.cooldown_secs = 0.0;
        }
        if let Ok(mut trace) = self.world.get::<&mut SensorTrace>(entity) {
            *trace = SensorTrace::default();
        }
    }
}
