use bevy::prelude::*;
use bevy::window::WindowResolution;
use sailing::config::load_sail_config;
use sailing::scene::{self, SKY_COLOR};
use sailing::simulation::SimulationPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Sailing".into(),
            resolution: WindowResolution::new(1280, 720),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(SKY_COLOR))
    .add_plugins(SimulationPlugin::<AssetServer>::default())
    .add_systems(Startup, scene::setup_scene.after(load_sail_config));

    app.run();
}
