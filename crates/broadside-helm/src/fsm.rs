//! Engagement behavior state machine.
//!
//! Pure decision function for one warship tick: given an immutable
//! snapshot of own state, orders, target, and sensor contacts, produce
//! maneuver and attack commands. The host applies all mutations.
//! Patrol/stalk transitions and target assignment are driven externally;
//! this module only decides per-state behavior.

use broadside_core::constants::RAY_COUNT;
use broadside_core::enums::{
    AttackCommand, EngagementState, ManeuverCommand, ShipClass,
};
use broadside_core::types::{Position, UnitId};

use crate::navigator::{compute_steering, NavigationTarget, SteerDelta, SteerDirection};
use crate::profiles::get_profile;
use crate::sensor::SensorReading;

/// Target state resolved from the unit registry at the start of the tick.
///
/// A destroyed target's position may still be read (to finish an orbit),
/// but it is never fired on.
#[derive(Debug, Clone, Copy)]
pub struct TargetSnapshot {
    pub id: UnitId,
    pub position: Position,
    pub destroyed: bool,
}

/// Input to the helm decision for a single warship tick.
pub struct HelmContext {
    pub class: ShipClass,
    pub state: EngagementState,
    pub position: Position,
    pub heading_deg: f64,
    pub speed_level: i8,
    pub target: Option<TargetSnapshot>,
    pub patrol_point: Option<Position>,
    pub contacts: [SensorReading; RAY_COUNT],
}

/// Output commands for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HelmCommands {
    pub maneuver: ManeuverCommand,
    pub attack: AttackCommand,
}

/// Decide this tick's commands.
///
/// A missing navigation target (no patrol area assigned, or no target
/// while stalking) is a valid no-op, not an error. Callers must not
/// invoke this for destroyed units.
pub fn decide(ctx: &HelmContext) -> HelmCommands {
    let profile = get_profile(ctx.class);

    let nav_target = match ctx.state {
        EngagementState::Patrol => ctx.patrol_point.map(|point| NavigationTarget {
            point,
            radius: profile.patrol_orbit_radius,
        }),
        EngagementState::Stalk => ctx.target.map(|target| NavigationTarget {
            point: target.position,
            radius: profile.stalk_orbit_radius,
        }),
    };
    let Some(nav_target) = nav_target else {
        return HelmCommands::default();
    };

    let delta = compute_steering(
        &ctx.position,
        ctx.heading_deg,
        ctx.speed_level,
        &nav_target,
        &ctx.contacts,
        &profile,
    );

    let attack = match (ctx.state, ctx.target) {
        (EngagementState::Stalk, Some(target)) if !target.destroyed => {
            let range = ctx.position.horizontal_range_to(&target.position);
            if range < profile.fire_range {
                AttackCommand::Fire
            } else {
                AttackCommand::Idle
            }
        }
        _ => AttackCommand::Idle,
    };

    HelmCommands {
        maneuver: maneuver_for(delta),
        attack,
    }
}

fn maneuver_for(delta: SteerDelta) -> ManeuverCommand {
    if delta.throttle_up {
        return ManeuverCommand::Forward;
    }
    match delta.steer {
        Some(SteerDirection::Left) => ManeuverCommand::Left,
        Some(SteerDirection::Right) => ManeuverCommand::Right,
        None => ManeuverCommand::Idle,
    }
}
