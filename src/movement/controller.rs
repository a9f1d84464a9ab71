//! Movement domain: the per-tick movement state machine.
//!
//! [`step`] is the whole update for one tick and touches nothing but the
//! [`MovementState`] it is given. [`MovementController`] wraps it with an
//! injected wall sensor and drives a [`KinematicBody`] host.

use bevy::prelude::*;

use crate::movement::{
    Facing, InputSnapshot, KinematicBody, MovementState, MovementTuning, SensorReading,
    WallSensor,
};

/// Everything a tick reads from outside the character.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    pub input: InputSnapshot,
    pub wall: SensorReading,
    /// Floor contact left by the previous integration step.
    pub on_floor: bool,
    pub dt: f32,
}

/// Advances `state` by one tick and returns the velocity to integrate.
///
/// Order matters: wall slide damping runs before the jump edge, so a wall
/// jump starts from that tick's damped fall speed.
pub fn step(state: &mut MovementState, tuning: &MovementTuning, ctx: &TickContext) -> Vec2 {
    let dt = usable_dt(ctx.dt);
    if dt.is_none() {
        // A zero-length tick is routine (first frame, paused clock)
        if ctx.dt == 0.0 {
            debug!("Skipping gravity and dash timing for dt=0");
        } else {
            warn!("Skipping gravity and dash timing for malformed dt={}", ctx.dt);
        }
    }

    apply_gravity(state, tuning, dt);
    state.input_axis = ctx.input.axis();
    handle_dash(state, tuning, &ctx.input, dt);
    handle_wall_slide(state, tuning, ctx.wall);
    handle_horizontal_movement(state, tuning, dt.unwrap_or(0.0));
    resolve_jump_buffer(state, tuning, ctx.on_floor);

    if ctx.input.jump.just_pressed {
        handle_jump_pressed(state, tuning, ctx.wall);
    }
    if ctx.input.jump.just_released {
        adjust_jump_height(state, tuning);
    }

    state.velocity
}

/// Applies what the integrator reported after moving the body.
pub fn finish_tick(state: &mut MovementState, on_floor: bool) {
    if on_floor && state.has_dashed {
        debug!("Landed: dash available again");
    }
    if on_floor {
        state.has_dashed = false;
    }
}

fn usable_dt(dt: f32) -> Option<f32> {
    (dt.is_finite() && dt > 0.0).then_some(dt)
}

fn apply_gravity(state: &mut MovementState, tuning: &MovementTuning, dt: Option<f32>) {
    let Some(dt) = dt else {
        return;
    };

    if state.velocity.y <= tuning.limit_speed_y && !state.is_dashing {
        state.velocity.y += tuning.gravity * dt;
    }
}

fn handle_dash(
    state: &mut MovementState,
    tuning: &MovementTuning,
    input: &InputSnapshot,
    dt: Option<f32>,
) {
    if input.dash.just_pressed && !state.has_dashed {
        state.velocity = state.input_axis * tuning.dash_speed;
        state.is_dashing = true;
        state.has_dashed = true;
        debug!("Dash: axis={}, velocity={}", state.input_axis, state.velocity);
    }

    if !state.is_dashing {
        return;
    }
    let Some(dt) = dt else {
        return;
    };

    state.dash_timer += 1;
    if state.dash_timer >= tuning.dash_duration_ticks(dt) {
        state.is_dashing = false;
        state.dash_timer = 0;
        debug!("Dash ended");
    }
}

fn handle_wall_slide(state: &mut MovementState, tuning: &MovementTuning, wall: SensorReading) {
    let sliding = !state.can_jump && wall.colliding;
    if sliding != state.wall_sliding {
        debug!("Wall slide: {}", sliding);
    }

    state.wall_sliding = sliding;
    if sliding {
        state.velocity.y *= tuning.wall_slide_factor;
    }
}

fn handle_horizontal_movement(state: &mut MovementState, tuning: &MovementTuning, dt: f32) {
    // Wall jump recovery: let the impulse play out
    if state.wall_jump_timer > 0 {
        state.wall_jump_timer -= 1;
        return;
    }

    let axis_x = state.input_axis.x;
    if axis_x != 0.0 {
        state.velocity.x = (state.velocity.x + axis_x * tuning.acceleration * dt)
            .clamp(-tuning.max_speed, tuning.max_speed);
        state.facing = if axis_x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        };
    } else {
        // Fixed fraction per tick, independent of dt
        state.velocity.x -= state.velocity.x * tuning.decel_factor;
    }
}

fn resolve_jump_buffer(state: &mut MovementState, tuning: &MovementTuning, on_floor: bool) {
    if state.jump_buffer_timer > 0 {
        if on_floor {
            perform_jump(state, tuning);
            state.jump_buffer_timer = 0;
            debug!("Buffered jump consumed on landing");
        } else {
            state.jump_buffer_timer -= 1;
        }
    }

    let previous = state.phase();
    if on_floor {
        state.grounded = true;
        state.coyote_timer = 0;
        state.can_jump = true;
    } else {
        state.grounded = false;
        state.coyote_timer = state.coyote_timer.saturating_add(1);
        if state.coyote_timer > tuning.max_coyote_ticks {
            state.can_jump = false;
        }
    }

    let phase = state.phase();
    if phase != previous {
        debug!(
            "Phase {:?} -> {:?} (coyote_timer={})",
            previous, phase, state.coyote_timer
        );
    }
}

fn handle_jump_pressed(state: &mut MovementState, tuning: &MovementTuning, wall: SensorReading) {
    if state.can_jump {
        perform_jump(state, tuning);
    } else if wall.colliding {
        perform_wall_jump(state, tuning, wall.normal);
    } else {
        state.jump_buffer_timer = tuning.jump_buffer_ticks;
        debug!("Jump buffered for {} ticks", state.jump_buffer_timer);
    }
}

fn perform_jump(state: &mut MovementState, tuning: &MovementTuning) {
    state.velocity.y = -tuning.jump_force;
    debug!("Jump: coyote_timer={}", state.coyote_timer);
}

fn perform_wall_jump(state: &mut MovementState, tuning: &MovementTuning, normal: Vec2) {
    // Lockout shares the jump buffer length; revisit if they need to diverge
    state.wall_jump_timer = tuning.jump_buffer_ticks;
    state.velocity.x = -tuning.wall_jump_force * normal.x;
    state.velocity.y = -tuning.jump_force;
    debug!("Wall jump: normal={}, velocity={}", normal, state.velocity);
}

/// Early release shortens the arc.
fn adjust_jump_height(state: &mut MovementState, tuning: &MovementTuning) {
    if state.velocity.y < -tuning.min_jump_force {
        state.velocity.y = -tuning.min_jump_force;
    }
}

/// A character's movement state together with its tuning and wall sensor.
#[derive(Debug)]
pub struct MovementController<S> {
    state: MovementState,
    tuning: MovementTuning,
    sensor: S,
}

impl<S: WallSensor> MovementController<S> {
    pub fn new(tuning: MovementTuning, sensor: S) -> Self {
        Self {
            state: MovementState::default(),
            tuning,
            sensor,
        }
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Runs one full tick: update, commit velocity, integrate, then observe
    /// the landing.
    pub fn tick<B: KinematicBody>(&mut self, input: &InputSnapshot, body: &mut B, dt: f32) -> Vec2 {
        let ctx = TickContext {
            input: *input,
            wall: SensorReading::sanitize(self.sensor.read()),
            on_floor: body.is_on_floor(),
            dt,
        };

        let velocity = step(&mut self.state, &self.tuning, &ctx);
        body.set_velocity(velocity);
        body.move_and_slide(dt);
        finish_tick(&mut self.state, body.is_on_floor());
        velocity
    }
}
