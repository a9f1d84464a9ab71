//! Kinematic movement controller for a single 2D platforming character.
//!
//! The controller turns a per-tick [`movement::InputSnapshot`] and wall sensor
//! reading into a velocity for an external integrator: gravity, horizontal
//! acceleration, coyote time, jump buffering, wall slide and wall jump, dash,
//! and variable jump height.

pub mod content;
pub mod movement;
