//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Half extent of the square battlefield (meters). Hulls are clamped
/// inside ±this on both horizontal axes.
pub const BATTLEFIELD_HALF_EXTENT: f64 = 500.0;

// --- Hull ---

/// Maximum (and starting) hull health.
pub const MAX_HEALTH: f64 = 10.0;

/// Health at or below this counts as destroyed.
pub const HEALTH_EPSILON: f64 = 1e-6;

/// Hull collision radius used by sensor raycasts (meters).
pub const HULL_RADIUS: f64 = 15.0;

// --- Range sensor ---

/// Number of evenly spaced sensor directions.
pub const RAY_COUNT: usize = 8;

/// Angular spacing between adjacent sensor directions (degrees).
pub const RAY_SPACING_DEG: f64 = 360.0 / RAY_COUNT as f64;

/// Maximum sensing range of a single ray (meters).
pub const SENSOR_MAX_RANGE: f64 = 400.0;

// --- Engine telegraph ---

/// Speed levels are clamped to ±this.
pub const SPEED_LEVEL_LIMIT: i8 = 2;

/// Steer levels are clamped to ±this.
pub const STEER_LEVEL_LIMIT: i8 = 2;

/// Forward speed per telegraph level (m/s).
pub const SPEED_PER_LEVEL: f64 = 5.0;

/// Turn rate per steer level (degrees/s), i.e. 1 degree/tick per level at 30 Hz.
pub const TURN_RATE_PER_LEVEL: f64 = 30.0;

/// Full fuel load (abstract units).
pub const ENGINE_MAX_FUEL: f64 = 1000.0;

/// Fuel burned per second per absolute speed level.
pub const FUEL_BURN_PER_LEVEL: f64 = 0.1;

// --- Helm heuristics ---

/// Minimum speed level before steering corrections are trusted.
pub const CRUISE_SPEED_LEVEL: i8 = 2;

/// Angular dead-zone for steering corrections (degrees).
pub const STEER_DEADZONE_DEG: f64 = 3.0;

/// Inverse-square constant for repulsion from other hulls.
pub const HOSTILE_REPULSION_K: f64 = 800.0;

/// Loiter radius around a patrol area point (meters).
pub const PATROL_ORBIT_RADIUS: f64 = 10.0;

/// Standoff radius when stalking a hostile (meters).
pub const STALK_ORBIT_RADIUS: f64 = 100.0;

// --- Main battery ---

/// Effective range of the main battery (meters).
pub const MAIN_BATTERY_RANGE: f64 = 250.0;

/// Reload time between salvos (seconds).
pub const MAIN_BATTERY_COOLDOWN_SECS: f64 = 2.0;

/// Rounds carried at battle start.
pub const MAIN_BATTERY_AMMO: u32 = 120;

/// Damage applied per honored fire request.
pub const SHELL_DAMAGE: f64 = 1.0;
