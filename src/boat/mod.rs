//! Boat module: the player-steered entity, its input handling and model loading.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Boat`, `ControlledEntity`) and the `SteerKey` mapping |
//! | [`control`] | Input + movement systems: arrow keys → velocities → `Transform` |
//!
//! All public items are re-exported at this level so the rest of the crate can
//! use flat `crate::boat::*` imports.

pub mod control;
pub mod state;

pub use control::{boat_update_system, keyboard_steer_system};
pub use state::{Boat, ControlledEntity, SteerKey};

use crate::assets::{report_load_failure, ModelLoader, ModelStatus, PendingModel};
use crate::config::SailConfig;
use bevy::prelude::*;

// ── Boat spawn ────────────────────────────────────────────────────────────────

/// Spawn the boat and start loading its model.
///
/// The entity exists from the first frame but carries no `SceneRoot` and no
/// `representation`; it stays inert until [`resolve_boat_model_system`] sees
/// the load finish.
pub fn spawn_boat<L: ModelLoader + Resource>(
    mut commands: Commands,
    loader: Res<L>,
    config: Res<SailConfig>,
) {
    let path = config.boat_model_path.clone();
    let handle = loader.load_scene(&path);
    let heading = config.boat_start_heading;

    commands.spawn((
        Boat,
        ControlledEntity::new(heading),
        PendingModel { path, handle },
        Transform::from_translation(Vec3::from_array(config.boat_start))
            .with_rotation(Quat::from_rotation_y(heading))
            .with_scale(Vec3::splat(config.boat_scale)),
        Visibility::default(),
    ));

    info!("Boat spawned; waiting for model");
}

/// Poll the boat's pending model load.
///
/// - **Ready**: attach the scene, record the representation, drop the marker.
/// - **Failed**: log once, drop the marker; the boat stays inert for the session.
/// - **Pending**: try again next frame.
pub fn resolve_boat_model_system<L: ModelLoader + Resource>(
    mut commands: Commands,
    loader: Res<L>,
    mut q: Query<(Entity, &PendingModel, &mut ControlledEntity), With<Boat>>,
) {
    for (entity, pending, mut boat) in q.iter_mut() {
        match loader.status(&pending.handle) {
            ModelStatus::Pending => {}
            ModelStatus::Ready => {
                boat.representation = Some(pending.handle.clone());
                commands
                    .entity(entity)
                    .insert(SceneRoot(pending.handle.clone()))
                    .remove::<PendingModel>();
                info!("Boat model ready ({})", pending.path);
            }
            ModelStatus::Failed(reason) => {
                report_load_failure(&pending.path, reason);
                commands.entity(entity).remove::<PendingModel>();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::CountingLoader;

    fn build_test_app(status: ModelStatus) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(SailConfig::default());
        app.insert_resource(CountingLoader::new(status));
        app.add_systems(Startup, spawn_boat::<CountingLoader>);
        app.add_systems(Update, resolve_boat_model_system::<CountingLoader>);
        app
    }

    fn boat(app: &mut App) -> (ControlledEntity, bool) {
        let mut query = app
            .world_mut()
            .query_filtered::<(&ControlledEntity, Has<PendingModel>), With<Boat>>();
        let (boat, pending) = query.single(app.world()).unwrap();
        (boat.clone(), pending)
    }

    #[test]
    fn boat_spawns_at_configured_pose() {
        let mut app = build_test_app(ModelStatus::Pending);
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<&Transform, With<Boat>>();
        let transform = *query.single(app.world()).unwrap();
        assert_eq!(transform.translation, Vec3::new(5.0, 13.05, 50.0));
        assert_eq!(transform.scale, Vec3::splat(3.0));
        assert_eq!(app.world().resource::<CountingLoader>().loads(), 1);
    }

    #[test]
    fn boat_stays_inert_while_pending() {
        let mut app = build_test_app(ModelStatus::Pending);
        app.update();
        app.update();

        let (boat, pending) = boat(&mut app);
        assert!(!boat.is_loaded());
        assert!(pending);
    }

    #[test]
    fn ready_model_attaches_representation() {
        let mut app = build_test_app(ModelStatus::Pending);
        app.update();
        app.world()
            .resource::<CountingLoader>()
            .set_status(ModelStatus::Ready);
        app.update();

        let (boat, pending) = boat(&mut app);
        assert!(boat.is_loaded());
        assert!(!pending, "marker must be removed once resolved");
    }

    #[test]
    fn failed_model_leaves_boat_inert_and_unmarked() {
        let mut app = build_test_app(ModelStatus::Failed("missing file".into()));
        app.update();
        app.update();

        let (boat, pending) = boat(&mut app);
        assert!(!boat.is_loaded());
        assert!(!pending, "failure must only be reported once");
    }
}
