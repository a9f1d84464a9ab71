//! Movement domain: demo room and player spawn helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyContacts, GameLayer, Ground, MovementState, Player, Wall, WallProbe};

/// Where the demo player appears.
const SPAWN_POINT: Vec2 = Vec2::new(0.0, 100.0);

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn spawn_player(mut commands: Commands) {
    info!("Spawning player");

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementState::default(),
            BodyContacts::default(),
            WallProbe::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_translation(SPAWN_POINT.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity comes from the controller
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

/// Ctrl+R puts the player back at the spawn point with fresh movement state.
#[cfg(feature = "dev-tools")]
pub fn handle_respawn_hotkey(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Transform, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for (mut transform, mut state, mut velocity) in &mut query {
        transform.translation = SPAWN_POINT.extend(0.0);
        *state = MovementState::default();
        *velocity = LinearVelocity::default();
    }
    info!("[DEBUG] Player respawned at {}", SPAWN_POINT);
}

pub fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    spawn_block(
        &mut commands,
        Vec2::new(0.0, -200.0),
        Vec2::new(800.0, 40.0),
        ground_color,
        (Ground, ground_layers),
    );

    // Outer walls for wall sliding and wall jumps
    for x in [-420.0, 420.0] {
        spawn_block(
            &mut commands,
            Vec2::new(x, 50.0),
            Vec2::new(40.0, 500.0),
            wall_color,
            (Wall, wall_layers),
        );
    }

    // Stepping platforms for coyote time and buffered jumps
    for (position, size) in [
        (Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0)),
        (Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0)),
        (Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0)),
    ] {
        spawn_block(
            &mut commands,
            position,
            size,
            platform_color,
            (Ground, ground_layers),
        );
    }

    // Pillar for wall jump chains
    spawn_block(
        &mut commands,
        Vec2::new(-100.0, -80.0),
        Vec2::new(30.0, 200.0),
        wall_color,
        (Wall, wall_layers),
    );
}

fn spawn_block(
    commands: &mut Commands,
    position: Vec2,
    size: Vec2,
    color: Color,
    kind: impl Bundle,
) {
    commands.spawn((
        kind,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    ));
}
