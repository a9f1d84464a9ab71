//! Movement domain: per-tick input snapshot handed to the controller.

use bevy::prelude::*;

/// One named action as seen during a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    /// Analog strength; digital sources report 0.0 or 1.0.
    pub strength: f32,
}

impl ActionState {
    /// Digital button state with full strength while held.
    pub fn from_digital(pressed: bool, just_pressed: bool, just_released: bool) -> Self {
        Self {
            pressed,
            just_pressed,
            just_released,
            strength: if pressed { 1.0 } else { 0.0 },
        }
    }

    /// Pressed this tick.
    pub fn tapped() -> Self {
        Self::from_digital(true, true, false)
    }

    /// Held since an earlier tick.
    pub fn held() -> Self {
        Self::from_digital(true, false, false)
    }

    /// Released this tick.
    pub fn released() -> Self {
        Self::from_digital(false, false, true)
    }

    /// Held with an analog strength, e.g. a stick deflection.
    pub fn analog(strength: f32) -> Self {
        Self {
            pressed: strength > 0.0,
            strength,
            ..default()
        }
    }

    /// Takes the current level from `next` but keeps any edge already seen,
    /// so an edge survives frames in which no tick ran.
    pub fn latch(&mut self, next: ActionState) {
        self.pressed = next.pressed;
        self.strength = next.strength;
        self.just_pressed |= next.just_pressed;
        self.just_released |= next.just_released;
    }

    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    /// Strength limited to [0, 1]; NaN reads as released.
    pub fn clamped_strength(&self) -> f32 {
        if self.strength.is_nan() {
            0.0
        } else {
            self.strength.clamp(0.0, 1.0)
        }
    }
}

/// Immutable input for one tick. Built by the caller; the controller never
/// polls input devices itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub jump: ActionState,
    pub dash: ActionState,
    pub left: ActionState,
    pub right: ActionState,
    pub up: ActionState,
    pub down: ActionState,
}

impl InputSnapshot {
    /// Net direction: `right - left` on x, `down - up` on y.
    pub fn axis(&self) -> Vec2 {
        Vec2::new(
            self.right.clamped_strength() - self.left.clamped_strength(),
            self.down.clamped_strength() - self.up.clamped_strength(),
        )
    }

    /// Folds a freshly sampled snapshot in with [`ActionState::latch`].
    pub fn latch(&mut self, next: InputSnapshot) {
        for (action, next) in self.actions_mut().into_iter().zip(next.actions()) {
            action.latch(next);
        }
    }

    /// Drops all edges once a tick has consumed them. Held levels remain.
    pub fn clear_edges(&mut self) {
        for action in self.actions_mut() {
            action.clear_edges();
        }
    }

    fn actions(&self) -> [ActionState; 6] {
        [self.jump, self.dash, self.left, self.right, self.up, self.down]
    }

    fn actions_mut(&mut self) -> [&mut ActionState; 6] {
        [
            &mut self.jump,
            &mut self.dash,
            &mut self.left,
            &mut self.right,
            &mut self.up,
            &mut self.down,
        ]
    }

    pub fn with_jump(mut self, jump: ActionState) -> Self {
        self.jump = jump;
        self
    }

    pub fn with_dash(mut self, dash: ActionState) -> Self {
        self.dash = dash;
        self
    }

    /// Holds left or right with the given strength; the sign picks the side.
    pub fn with_horizontal(mut self, strength: f32) -> Self {
        if strength < 0.0 {
            self.left = ActionState::analog(-strength);
        } else {
            self.right = ActionState::analog(strength);
        }
        self
    }

    /// Holds up or down with the given strength; positive is down.
    pub fn with_vertical(mut self, strength: f32) -> Self {
        if strength < 0.0 {
            self.up = ActionState::analog(-strength);
        } else {
            self.down = ActionState::analog(strength);
        }
        self
    }
}
