//! Boat-versus-trash collision sweep.
//!
//! The proximity test is a square on the horizontal plane: two positions
//! collide when both their X and Z deltas are strictly below the threshold.
//! Height is ignored.

use crate::boat::{Boat, ControlledEntity};
use crate::config::SailConfig;
use crate::trash::{SlotState, TrashPool};
use bevy::prelude::*;

/// Axis-aligned proximity test on X and Z.  Symmetric in `a` and `b`.
#[inline]
pub fn is_colliding(a: Vec3, b: Vec3, threshold: f32) -> bool {
    (a.x - b.x).abs() < threshold && (a.z - b.z).abs() < threshold
}

impl TrashPool {
    /// Retire every live slot within `threshold` of `boat_position`.
    ///
    /// Returns `(slot index, entity)` for each slot retired by this call.
    /// Pending and retired slots are skipped, so repeated sweeps never
    /// re-test or revive a collected item.
    pub fn sweep(&mut self, boat_position: Vec3, threshold: f32) -> Vec<(usize, Entity)> {
        let mut retired = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let SlotState::Live(entity) = slot.state else {
                continue;
            };
            if is_colliding(boat_position, slot.position, threshold) {
                slot.state = SlotState::Retired;
                retired.push((index, entity));
            }
        }
        retired
    }
}

/// Despawn every live trash item the boat currently overlaps.
///
/// Skipped entirely until the boat model has loaded.  Runs after
/// [`crate::boat::boat_update_system`], so it sees this frame's position.
pub fn collision_sweep_system(
    mut commands: Commands,
    q_boat: Query<(&ControlledEntity, &Transform), With<Boat>>,
    mut pool: ResMut<TrashPool>,
    config: Res<SailConfig>,
) {
    let Ok((boat, transform)) = q_boat.single() else {
        return;
    };
    if !boat.is_loaded() {
        return;
    }

    let retired = pool.sweep(transform.translation, config.collision_threshold);
    if retired.is_empty() {
        return;
    }

    for (index, entity) in &retired {
        commands.entity(*entity).despawn();
        debug!("Collected trash #{index}");
    }

    if pool.live_count() == 0 && pool.pending_count() == 0 {
        info!("All {} trash items collected", pool.retired_count());
    }
}
