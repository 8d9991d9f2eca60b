//! Static scene dressing: camera, water plane, sun and sky.
//!
//! None of this takes part in the simulation; it only gives the boat and the
//! trash something to float on and a view to be seen from.

use crate::config::SailConfig;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

/// Sky colour used for the window clear colour.
pub const SKY_COLOR: Color = Color::srgb(0.53, 0.75, 0.92);

/// Unit vector pointing from the origin towards the sun.
///
/// `elevation` is measured up from the horizon, `azimuth` around +Y starting at
/// +Z, both in degrees.
pub fn sun_direction(elevation_degrees: f32, azimuth_degrees: f32) -> Vec3 {
    let phi = (90.0 - elevation_degrees).to_radians();
    let theta = azimuth_degrees.to_radians();
    Vec3::new(
        phi.sin() * theta.sin(),
        phi.cos(),
        phi.sin() * theta.cos(),
    )
}

/// Startup system: spawn the camera, water and sun, and set the ambient fill.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SailConfig>,
) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: config.camera_fov_degrees.to_radians(),
            near: config.camera_near,
            far: config.camera_far,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Transform::from_translation(Vec3::from_array(config.camera_position))
            .looking_at(Vec3::from_array(config.camera_target), Vec3::Y),
    ));

    let [r, g, b] = config.water_color;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(config.water_size, config.water_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(r, g, b),
            perceptual_roughness: 0.08,
            reflectance: 0.9,
            ..default()
        })),
        Transform::default(),
    ));

    let sun = sun_direction(config.sun_elevation_degrees, config.sun_azimuth_degrees);
    commands.spawn((
        DirectionalLight {
            illuminance: config.sun_illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(sun).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: SKY_COLOR,
        brightness: config.ambient_brightness,
        ..default()
    });

    eprintln!("[SETUP] Camera, water and sun spawned");
}
