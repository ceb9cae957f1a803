//! Discretized engine telegraph.
//!
//! Speed and steer are integer levels clamped to a symmetric range.
//! These levels are the sole actuation surface; mapping them to physical
//! velocity and turn rate is the host's concern.

use serde::{Deserialize, Serialize};

use broadside_core::constants::{
    ENGINE_MAX_FUEL, FUEL_BURN_PER_LEVEL, SPEED_LEVEL_LIMIT, STEER_LEVEL_LIMIT,
};
use broadside_core::enums::ManeuverCommand;

/// Engine telegraph state. Levels clamp silently at their bounds;
/// trying to push past a bound is a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    speed_level: i8,
    steer_level: i8,
    fuel: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            speed_level: 0,
            steer_level: 0,
            fuel: ENGINE_MAX_FUEL,
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed_level(&self) -> i8 {
        self.speed_level
    }

    pub fn steer_level(&self) -> i8 {
        self.steer_level
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn set_speed_level(&mut self, level: i8) {
        self.speed_level = level.clamp(-SPEED_LEVEL_LIMIT, SPEED_LEVEL_LIMIT);
    }

    pub fn set_steer_level(&mut self, level: i8) {
        self.steer_level = level.clamp(-STEER_LEVEL_LIMIT, STEER_LEVEL_LIMIT);
    }

    pub fn adjust_speed(&mut self, delta: i8) {
        self.set_speed_level(self.speed_level.saturating_add(delta));
    }

    pub fn adjust_steer(&mut self, delta: i8) {
        self.set_steer_level(self.steer_level.saturating_add(delta));
    }

    /// Apply one tick's maneuver command.
    pub fn apply(&mut self, command: ManeuverCommand) {
        match command {
            ManeuverCommand::Idle => {}
            ManeuverCommand::Forward => self.adjust_speed(1),
            ManeuverCommand::Backward => self.adjust_speed(-1),
            ManeuverCommand::Left => self.adjust_steer(-1),
            ManeuverCommand::Right => self.adjust_steer(1),
        }
    }

    /// Burn fuel for `dt` seconds at the current throttle setting.
    pub fn burn(&mut self, dt: f64) {
        let burn = self.speed_level.unsigned_abs() as f64 * FUEL_BURN_PER_LEVEL * dt;
        self.fuel = (self.fuel - burn).max(0.0);
    }

    /// Return to neutral: both levels zero, fuel topped up.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
