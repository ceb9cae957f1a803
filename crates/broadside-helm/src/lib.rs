//! Autonomous helm for BROADSIDE warships.
//!
//! Implements the potential-field navigator, the discretized engine
//! telegraph, and the patrol/stalk engagement state machine.
//! Pure functions over plain data, with no ECS dependency.

pub mod engine;
pub mod fsm;
pub mod navigator;
pub mod profiles;
pub mod sensor;

pub use broadside_core as core;
