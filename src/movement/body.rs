//! Movement domain: capabilities the host provides to the controller.

use bevy::prelude::*;

/// Result of probing for a wall in front of the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub colliding: bool,
    /// Surface normal of the hit; only meaningful while `colliding`.
    pub normal: Vec2,
}

impl SensorReading {
    pub const CLEAR: Self = Self {
        colliding: false,
        normal: Vec2::ZERO,
    };

    pub fn hit(normal: Vec2) -> Self {
        Self {
            colliding: true,
            normal,
        }
    }

    /// Collapses a missing or unusable reading to `CLEAR`.
    pub fn sanitize(reading: Option<Self>) -> Self {
        match reading {
            Some(reading) if reading.colliding && reading.normal.is_finite() => reading,
            _ => Self::CLEAR,
        }
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self::CLEAR
    }
}

/// Forward contact sensor, resolved once when the character is spawned.
pub trait WallSensor {
    /// `None` when the sensor is unavailable or its query failed.
    fn read(&self) -> Option<SensorReading>;
}

impl<T: WallSensor + ?Sized> WallSensor for &T {
    fn read(&self) -> Option<SensorReading> {
        (**self).read()
    }
}

/// Sensor for characters without a wall probe. Never reports contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl WallSensor for NoSensor {
    fn read(&self) -> Option<SensorReading> {
        None
    }
}

/// The host's integrator: owns the position and resolves collisions.
pub trait KinematicBody {
    fn set_velocity(&mut self, velocity: Vec2);

    /// Sweeps the body by its velocity over `dt`, sliding along collisions.
    fn move_and_slide(&mut self, dt: f32);

    /// Floor contact from the most recent `move_and_slide`.
    fn is_on_floor(&self) -> bool;
}
