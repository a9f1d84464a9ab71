//! Movement domain: kinematic platformer controller and its Bevy wiring.

mod body;
mod components;
mod controller;
pub mod dev;
mod input;
mod resources;
mod systems;

pub use body::{KinematicBody, NoSensor, SensorReading, WallSensor};
pub use components::{
    BodyContacts, Facing, GameLayer, Ground, JumpPhase, MovementState, Player, Wall, WallProbe,
};
pub use controller::{MovementController, TickContext, finish_tick, step};
pub use input::{ActionState, InputSnapshot};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::systems::{
    clear_input_edges, detect_ground, detect_walls, drive_controller, read_input,
};

/// Samples input every frame and steps the controller once per fixed tick,
/// ahead of Avian's physics step.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (
                    detect_ground,
                    detect_walls,
                    drive_controller,
                    clear_input_edges,
                )
                    .chain(),
            );
    }
}
