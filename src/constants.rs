//! Centralised gameplay and scene constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  [`crate::config::SailConfig::default`] mirrors every
//! value below; `assets/sailing.toml` can override any subset at startup.

// ── Trash Pool ────────────────────────────────────────────────────────────────

/// Number of trash items scattered at startup.
pub const TRASH_COUNT: usize = 50;

/// Trash spawns uniformly inside `[-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT)` on
/// both horizontal axes (X and Z).
pub const SPAWN_HALF_EXTENT: f32 = 150.0;

/// Fixed height at which every trash item floats.
pub const TRASH_HEIGHT: f32 = -0.5;

/// Uniform scale applied to each trash model instance.
pub const TRASH_SCALE: f32 = 1.5;

// ── Collision ─────────────────────────────────────────────────────────────────

/// Per-axis proximity threshold (world units).
///
/// The boat collects a trash item when both the X and Z deltas are strictly
/// below this value.  This is a square test, not a circle.
pub const COLLISION_THRESHOLD: f32 = 15.0;

// ── Boat ──────────────────────────────────────────────────────────────────────

/// Spawn position of the boat.
pub const BOAT_START: [f32; 3] = [5.0, 13.05, 50.0];

/// Initial heading of the boat (radians about +Y).
pub const BOAT_START_HEADING: f32 = 1.5;

/// Uniform scale applied to the boat model.
pub const BOAT_SCALE: f32 = 3.0;

/// Linear speed set by the forward / backward keys (world units per frame).
pub const FORWARD_SPEED: f32 = 1.0;

/// Angular speed set by the turn keys (radians per frame).
pub const TURN_RATE: f32 = 0.05;

/// Amplitude of the vertical bob nudge added every frame.
///
/// The nudge is `sin(t) * BOB_AMPLITUDE` and is *added* to the position, so it
/// accumulates over time rather than oscillating around a fixed height.
pub const BOB_AMPLITUDE: f32 = 0.005;

// ── Assets ────────────────────────────────────────────────────────────────────

pub const BOAT_MODEL_PATH: &str = "models/boat/scene.gltf";
pub const TRASH_MODEL_PATH: &str = "models/trash/scene.gltf";

/// Runtime config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/sailing.toml";

// ── Camera ────────────────────────────────────────────────────────────────────

pub const CAMERA_POSITION: [f32; 3] = [30.0, 30.0, 100.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 10.0, 0.0];

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 20_000.0;

// ── Water & Sky ───────────────────────────────────────────────────────────────

/// Side length of the square water plane.
pub const WATER_SIZE: f32 = 10_000.0;

/// Water base colour (`#001e0f`).
pub const WATER_COLOR: [u8; 3] = [0x00, 0x1e, 0x0f];

/// Sun elevation above the horizon, in degrees.
pub const SUN_ELEVATION_DEGREES: f32 = 2.0;

/// Sun azimuth, in degrees.
pub const SUN_AZIMUTH_DEGREES: f32 = 180.0;

/// Illuminance of the directional sun light (lux).
pub const SUN_ILLUMINANCE: f32 = 10_000.0;

/// Brightness of the global ambient fill light (cd/m²).
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
