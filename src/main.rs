use avian2d::prelude::*;
use bevy::prelude::*;

use platform_kinematics::content::ContentPlugin;
use platform_kinematics::movement::{self, MovementPlugin};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platform Kinematics".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Tick-counted tuning (coyote, buffer, lockout) assumes 60 Hz
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .add_plugins((ContentPlugin::default(), MovementPlugin))
    .add_systems(
        Startup,
        (
            movement::dev::setup_camera,
            movement::dev::spawn_test_room,
            movement::dev::spawn_player,
        ),
    );

    #[cfg(feature = "dev-tools")]
    app.add_systems(Update, movement::dev::handle_respawn_hotkey);

    app.run();
}
