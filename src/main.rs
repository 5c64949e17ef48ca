use bevy::prelude::*;

mod config;
mod systems;

use config::{CAMERA_START_DISTANCE, SIM_TICK_HZ};
use systems::asteroids::AsteroidsPlugin;
use systems::audio::MusicPlugin;
use systems::bodies::BodiesPlugin;
use systems::camera::{OrbitCamPlugin, OrbitCamera};
use systems::comets::CometsPlugin;
use systems::stars::StarsPlugin;
use systems::ui::HudPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System Simulation".to_string(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.0)))
        // one simulation tick per rendered frame at the 60 fps cap
        .insert_resource(Time::<Fixed>::from_hz(SIM_TICK_HZ))
        .add_plugins((
            OrbitCamPlugin,
            BodiesPlugin,
            AsteroidsPlugin,
            CometsPlugin,
            StarsPlugin,
            MusicPlugin,
            HudPlugin,
        ))
        .add_systems(Startup, setup)
        .add_systems(Update, exit_on_escape)
        .run()
}

// scene setup here
fn setup(mut commands: Commands) {
    // key light, matches the fixed directional light of the scene
    commands.spawn((
        DirectionalLight {
            illuminance: 3_000.0,
            ..default()
        },
        Transform::from_xyz(10.0, 5.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
        ..default()
    });

    // spawn camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, CAMERA_START_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::new(CAMERA_START_DISTANCE),
    ));
}

fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
