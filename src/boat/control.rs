//! Boat input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`keyboard_steer_system`] turns `KeyboardInput` messages into velocity
//!    changes on [`ControlledEntity`].
//! 2. [`boat_update_system`] integrates those velocities into the boat's
//!    `Transform`.
//!
//! The collision sweep runs after step 2 and reads the position it wrote.

use super::state::{Boat, ControlledEntity, SteerKey};
use crate::config::SailConfig;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

/// Apply key press / release messages to the boat, in arrival order.
///
/// - **ArrowUp / ArrowDown** → `linear_velocity = ±forward_speed`
/// - **ArrowLeft / ArrowRight** → `angular_velocity = ±turn_rate`
/// - **any release** → both velocities reset to zero
///
/// Key auto-repeat presses simply re-set the same value.
pub fn keyboard_steer_system(
    mut events: MessageReader<KeyboardInput>,
    mut q: Query<&mut ControlledEntity, With<Boat>>,
    config: Res<SailConfig>,
) {
    let Ok(mut boat) = q.single_mut() else {
        // Drain anyway so stale presses don't apply once the boat appears.
        events.clear();
        return;
    };

    for event in events.read() {
        match event.state {
            ButtonState::Pressed => {
                if let Some(key) = SteerKey::from_key_code(event.key_code) {
                    boat.on_key_down(key, &config);
                }
            }
            ButtonState::Released => boat.on_key_up(),
        }
    }
}

/// Integrate the boat's heading and position for this frame.
///
/// A no-op until the boat model has loaded.  The bob term uses the elapsed
/// time since startup.
pub fn boat_update_system(
    mut q: Query<(&mut ControlledEntity, &mut Transform), With<Boat>>,
    time: Res<Time>,
    config: Res<SailConfig>,
) {
    let Ok((mut boat, mut transform)) = q.single_mut() else {
        return;
    };
    boat.update(&mut transform, time.elapsed_secs(), config.bob_amplitude);
}

// ── Unit tests ────────────────────────────────────────────────────────────────
