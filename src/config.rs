//! Runtime scene configuration loaded from `assets/sailing.toml`.
//!
//! [`SailConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_sail_config`] reads
//! `assets/sailing.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<SailConfig>` to any system parameter list and read values
//! with `config.collision_threshold`, `config.turn_rate`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `SailConfig::default()`.

use crate::constants::*;
use crate::error::{SailError, SailResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay and scene configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SailConfig {
    // ── Trash Pool ────────────────────────────────────────────────────────────
    pub trash_count: usize,
    pub spawn_half_extent: f32,
    pub trash_height: f32,
    pub trash_scale: f32,

    // ── Collision ─────────────────────────────────────────────────────────────
    pub collision_threshold: f32,

    // ── Boat ──────────────────────────────────────────────────────────────────
    pub boat_start: [f32; 3],
    pub boat_start_heading: f32,
    pub boat_scale: f32,
    pub forward_speed: f32,
    pub turn_rate: f32,
    pub bob_amplitude: f32,

    // ── Assets ────────────────────────────────────────────────────────────────
    pub boat_model_path: String,
    pub trash_model_path: String,

    // ── Camera ────────────────────────────────────────────────────────────────
    pub camera_position: [f32; 3],
    pub camera_target: [f32; 3],
    pub camera_fov_degrees: f32,
    pub camera_near: f32,
    pub camera_far: f32,

    // ── Water & Sky ───────────────────────────────────────────────────────────
    pub water_size: f32,
    pub water_color: [u8; 3],
    pub sun_elevation_degrees: f32,
    pub sun_azimuth_degrees: f32,
    pub sun_illuminance: f32,
    pub ambient_brightness: f32,
}

impl Default for SailConfig {
    fn default() -> Self {
        Self {
            // Trash Pool
            trash_count: TRASH_COUNT,
            spawn_half_extent: SPAWN_HALF_EXTENT,
            trash_height: TRASH_HEIGHT,
            trash_scale: TRASH_SCALE,
            // Collision
            collision_threshold: COLLISION_THRESHOLD,
            // Boat
            boat_start: BOAT_START,
            boat_start_heading: BOAT_START_HEADING,
            boat_scale: BOAT_SCALE,
            forward_speed: FORWARD_SPEED,
            turn_rate: TURN_RATE,
            bob_amplitude: BOB_AMPLITUDE,
            // Assets
            boat_model_path: BOAT_MODEL_PATH.to_string(),
            trash_model_path: TRASH_MODEL_PATH.to_string(),
            // Camera
            camera_position: CAMERA_POSITION,
            camera_target: CAMERA_TARGET,
            camera_fov_degrees: CAMERA_FOV_DEGREES,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            // Water & Sky
            water_size: WATER_SIZE,
            water_color: WATER_COLOR,
            sun_elevation_degrees: SUN_ELEVATION_DEGREES,
            sun_azimuth_degrees: SUN_AZIMUTH_DEGREES,
            sun_illuminance: SUN_ILLUMINANCE,
            ambient_brightness: AMBIENT_BRIGHTNESS,
        }
    }
}

impl SailConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(path: &str, contents: &str) -> SailResult<Self> {
        let config: SailConfig = toml::from_str(contents).map_err(|e| SailError::ConfigParse {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        validate_config(&config)?;
        Ok(config)
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if any value would make the scene degenerate.
pub fn validate_config(config: &SailConfig) -> SailResult<()> {
    validate_positive("collision_threshold", config.collision_threshold)?;
    validate_positive("spawn_half_extent", config.spawn_half_extent)?;
    validate_positive("trash_scale", config.trash_scale)?;
    validate_positive("boat_scale", config.boat_scale)?;
    validate_positive("forward_speed", config.forward_speed)?;
    if config.trash_count == 0 {
        return Err(SailError::UnsafeValue {
            name: "trash_count",
            value: 0.0,
            safe_range: "[1, ∞)",
        });
    }
    Ok(())
}

fn validate_positive(name: &'static str, value: f32) -> SailResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SailError::UnsafeValue {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Startup system: attempt to load `assets/sailing.toml` and overwrite the
/// `SailConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  Parse or validation errors are
/// logged but do not abort the scene.  A missing file is not an error.
pub fn load_sail_config(mut config: ResMut<SailConfig>) {
    let path = CONFIG_PATH;
    match std::fs::read_to_string(path) {
        Ok(contents) => match SailConfig::from_toml(path, &contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded scene config from {path}");
            }
            Err(e) => {
                warn!("{e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {path} found; using compiled defaults");
        }
    }
}
