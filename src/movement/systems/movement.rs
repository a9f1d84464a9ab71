//! Movement domain: drives the controller from ECS state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    BodyContacts, MovementInput, MovementState, MovementTuning, Player, TickContext, finish_tick,
    step,
};

/// Runs one controller tick per player and hands the velocity to Avian.
/// Scheduled in `FixedUpdate`, where `Time` is the fixed clock.
///
/// Contacts were detected after the previous physics step, so the landing
/// reset for that step is applied before the new tick starts.
pub(crate) fn drive_controller(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&BodyContacts, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (contacts, mut state, mut velocity) in &mut query {
        finish_tick(&mut state, contacts.on_floor);

        let ctx = TickContext {
            input: input.snapshot,
            wall: contacts.wall,
            on_floor: contacts.on_floor,
            dt,
        };
        let screen_velocity = step(&mut state, &tuning, &ctx);
        velocity.0 = screen_to_world(screen_velocity);
    }
}

/// The controller works in screen space (+y down); Bevy's world is +y up.
pub(crate) fn screen_to_world(velocity: Vec2) -> Vec2 {
    Vec2::new(velocity.x, -velocity.y)
}
