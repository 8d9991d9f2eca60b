//! Boat components.
//!
//! Systems that mutate this state live in [`super::control`] (input and
//! per-frame integration) and [`super`] (spawn and model resolution).

use crate::config::SailConfig;
use bevy::prelude::*;

/// Marker component for the boat entity.
#[derive(Component)]
pub struct Boat;

/// The four steering keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerKey {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl SteerKey {
    /// Map an arrow key to its steering command.  Every other key is `None`.
    pub fn from_key_code(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowUp => Some(Self::Forward),
            KeyCode::ArrowDown => Some(Self::Backward),
            KeyCode::ArrowLeft => Some(Self::TurnLeft),
            KeyCode::ArrowRight => Some(Self::TurnRight),
            _ => None,
        }
    }
}

/// Motion state of the player-steered boat.
///
/// Position lives in the entity's [`Transform`]; this component holds the
/// heading and the two per-frame velocities set by key events.
///
/// `representation` is `None` until the boat model has finished loading.
/// While it is `None` the boat is inert: [`ControlledEntity::update`] does
/// nothing and the collision sweep is skipped.
#[derive(Component, Debug, Clone, Default)]
pub struct ControlledEntity {
    /// Rotation about world +Y, in radians.
    pub heading: f32,
    /// World units per frame along the boat's local +X.
    pub linear_velocity: f32,
    /// Radians per frame about +Y.
    pub angular_velocity: f32,
    pub representation: Option<Handle<Scene>>,
}

impl ControlledEntity {
    pub fn new(heading: f32) -> Self {
        Self {
            heading,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.representation.is_some()
    }

    /// Apply a key press.  Last press wins; opposite keys are not summed.
    pub fn on_key_down(&mut self, key: SteerKey, config: &SailConfig) {
        match key {
            SteerKey::Forward => self.linear_velocity = config.forward_speed,
            SteerKey::Backward => self.linear_velocity = -config.forward_speed,
            SteerKey::TurnLeft => self.angular_velocity = config.turn_rate,
            SteerKey::TurnRight => self.angular_velocity = -config.turn_rate,
        }
    }

    /// Releasing any key, steering or not, stops the boat.
    pub fn on_key_up(&mut self) {
        self.linear_velocity = 0.0;
        self.angular_velocity = 0.0;
    }

    /// Integrate one frame of motion into `transform`.
    ///
    /// 1. `heading += angular_velocity`
    /// 2. translate `linear_velocity` along local +X
    /// 3. translate `sin(elapsed_secs) * bob_amplitude` along local +Y
    ///
    /// Step 3 is added every frame, so the height drifts rather than
    /// oscillating about a fixed level.
    pub fn update(&mut self, transform: &mut Transform, elapsed_secs: f32, bob_amplitude: f32) {
        if !self.is_loaded() {
            return;
        }

        self.heading += self.angular_velocity;
        transform.rotation = Quat::from_rotation_y(self.heading);

        let forward = transform.rotation * Vec3::X;
        transform.translation += forward * self.linear_velocity;

        let up = transform.rotation * Vec3::Y;
        transform.translation += up * (elapsed_secs.sin() * bob_amplitude);
    }
}
