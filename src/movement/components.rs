//! Movement domain: per-character state, contact readings and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::SensorReading;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Movement state owned by a single character.
///
/// Velocities are in screen space (+y points down), so an upward jump is a
/// negative `velocity.y`. Timers count physics ticks, not seconds.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct MovementState {
    pub velocity: Vec2,
    /// Net input direction sampled this tick, each component in [-1, 1].
    pub input_axis: Vec2,
    /// Ticks since the last floor contact. Saturates instead of wrapping.
    pub coyote_timer: u32,
    pub jump_buffer_timer: u32,
    /// Ticks of horizontal input suppression left after a wall jump.
    pub wall_jump_timer: u32,
    pub dash_timer: u32,
    /// Derived from floor contact and `coyote_timer` once per tick.
    pub can_jump: bool,
    pub wall_sliding: bool,
    pub is_dashing: bool,
    /// Latched by a dash, cleared only by landing.
    pub has_dashed: bool,
    /// Floor contact seen by the most recent jump resolution.
    pub grounded: bool,
    pub facing: Facing,
}

impl MovementState {
    /// Jump eligibility phase as of the last completed tick.
    pub fn phase(&self) -> JumpPhase {
        if self.grounded {
            JumpPhase::Grounded
        } else if self.can_jump {
            JumpPhase::AirborneCoyote
        } else {
            JumpPhase::AirborneLocked
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    /// Touching the floor; a jump fires immediately.
    Grounded,
    /// Left the floor less than `max_coyote_ticks` ago; still jump-eligible.
    AirborneCoyote,
    /// Out of the coyote window until the next floor contact.
    AirborneLocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }
}

/// Contacts reported by the spatial queries after the last physics step.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BodyContacts {
    pub on_floor: bool,
    pub wall: SensorReading,
}

/// Forward wall probe attached to a character at spawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct WallProbe {
    /// How far past the collider edge the ray reaches.
    pub reach: f32,
}

impl Default for WallProbe {
    fn default() -> Self {
        Self { reach: 4.0 }
    }
}
