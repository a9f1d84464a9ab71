//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::InputSnapshot;

/// Movement tuning. Speeds are in pixels per second, screen space (+y down);
/// `*_ticks` values count physics ticks.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub acceleration: f32,
    pub max_speed: f32,
    /// Gravity stops adding once `velocity.y` exceeds this.
    pub limit_speed_y: f32,
    pub jump_force: f32,
    /// Ascent speed a released jump is clamped to.
    pub min_jump_force: f32,
    pub max_coyote_ticks: u32,
    /// Also the horizontal input lockout after a wall jump.
    pub jump_buffer_ticks: u32,
    pub wall_jump_force: f32,
    pub gravity: f32,
    pub dash_speed: f32,
    /// Dash length in seconds, converted to ticks with the current `dt`.
    pub dash_duration: f32,
    /// Per-tick multiplier on `velocity.y` while wall sliding.
    pub wall_slide_factor: f32,
    /// Fraction of horizontal speed shed per tick without input.
    pub decel_factor: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            acceleration: 3000.0,
            max_speed: 18000.0,
            limit_speed_y: 1200.0,
            jump_force: 36000.0,
            min_jump_force: 12000.0,
            max_coyote_ticks: 6,
            jump_buffer_ticks: 10,
            wall_jump_force: 18000.0,
            gravity: 2100.0,
            dash_speed: 36000.0,
            dash_duration: 0.25,
            wall_slide_factor: 0.8,
            decel_factor: 0.4,
        }
    }
}

impl MovementTuning {
    /// Dash length in ticks for a tick of `dt` seconds.
    ///
    /// Recomputed from the current `dt`, so under variable frame pacing the
    /// real dash length drifts from `dash_duration`.
    pub fn dash_duration_ticks(&self, dt: f32) -> u32 {
        (self.dash_duration / dt).round() as u32
    }

    /// Apex height of an uninterrupted jump under continuous gravity.
    /// Uses h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }
}

/// Input snapshot for the current frame, written by `read_input`.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub snapshot: InputSnapshot,
}
