//! Movement domain: keyboard sampling into the latched input snapshot.

use bevy::prelude::*;

use crate::movement::{ActionState, InputSnapshot, MovementInput};

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

/// Runs every frame. Press/release edges accumulate until a fixed tick
/// consumes them, so a tap between ticks is never lost.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.snapshot.latch(InputSnapshot {
        jump: action(&keyboard, JUMP),
        dash: action(&keyboard, DASH),
        left: action(&keyboard, LEFT),
        right: action(&keyboard, RIGHT),
        up: action(&keyboard, UP),
        down: action(&keyboard, DOWN),
    });
}

/// Runs after the controller in the fixed schedule.
pub(crate) fn clear_input_edges(mut input: ResMut<MovementInput>) {
    input.snapshot.clear_edges();
}

fn action(keyboard: &ButtonInput<KeyCode>, keys: [KeyCode; 2]) -> ActionState {
    ActionState::from_digital(
        keyboard.any_pressed(keys),
        keyboard.any_just_pressed(keys),
        keyboard.any_just_released(keys),
    )
}
