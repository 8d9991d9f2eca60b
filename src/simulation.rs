//! Simulation plugin: wires config, boat, trash pool and collision sweep.
//!
//! ## Frame order (`Update`, chained)
//!
//! 1. `resolve_boat_model_system`: poll the boat's model load
//! 2. `populate_trash_pool_system`: spawn the trash once its model is in
//! 3. `keyboard_steer_system`: key messages → boat velocities
//! 4. `boat_update_system`: velocities → boat `Transform`
//! 5. `collision_sweep_system`: retire trash under the boat
//!
//! The plugin is generic over the [`ModelLoader`] so headless tests can swap
//! Bevy's `AssetServer` for an in-memory fake.

use crate::assets::ModelLoader;
use crate::boat::{
    boat_update_system, keyboard_steer_system, resolve_boat_model_system, spawn_boat,
};
use crate::collision::collision_sweep_system;
use crate::config::{load_sail_config, SailConfig};
use crate::trash::{populate_trash_pool_system, spawn_trash_pool, TrashPool};
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use std::marker::PhantomData;

pub struct SimulationPlugin<L> {
    _loader: PhantomData<fn() -> L>,
}

impl<L> Default for SimulationPlugin<L> {
    fn default() -> Self {
        Self {
            _loader: PhantomData,
        }
    }
}

impl<L: ModelLoader + Resource> Plugin for SimulationPlugin<L> {
    fn build(&self, app: &mut App) {
        // Insert SailConfig with compiled defaults; load_sail_config will
        // overwrite it from assets/sailing.toml (if present) in Startup.
        app.insert_resource(SailConfig::default())
            .init_resource::<TrashPool>()
            .add_message::<KeyboardInput>()
            .add_systems(
                Startup,
                (
                    // Load config first so every other startup system sees the final values.
                    load_sail_config,
                    spawn_boat::<L>.after(load_sail_config),
                    spawn_trash_pool::<L>.after(load_sail_config),
                ),
            )
            .add_systems(
                Update,
                (
                    resolve_boat_model_system::<L>,
                    populate_trash_pool_system::<L>,
                    keyboard_steer_system,
                    boat_update_system,
                    collision_sweep_system,
                )
                    .chain(),
            );
    }
}
