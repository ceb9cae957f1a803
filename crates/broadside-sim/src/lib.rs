//! Simulation host for BROADSIDE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and
//! produces BattleSnapshots. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod spatial;
pub mod systems;
pub mod world_setup;

pub use broadside_core as core;
pub use engine::BattleEngine;

#[cfg(test)]
mod tests;
