//! Validation for movement tuning values.

use crate::movement::MovementTuning;

/// A tuning field holding a value the controller cannot run with.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field '{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a float field against a predicate
macro_rules! check_field {
    ($errors:expr, $tuning:expr, $field:ident, $expected:expr, $ok:expr) => {
        let value = $tuning.$field;
        if !(value.is_finite() && $ok(value)) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

/// Validate every float field of the tuning.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let non_negative = |v: f32| v >= 0.0;
    let positive = |v: f32| v > 0.0;
    let unit = |v: f32| (0.0..=1.0).contains(&v);

    check_field!(errors, tuning, acceleration, "finite and >= 0", non_negative);
    check_field!(errors, tuning, max_speed, "finite and >= 0", non_negative);
    // Negative is allowed: it caps gravity while still rising
    check_field!(errors, tuning, limit_speed_y, "finite", |_: f32| true);
    check_field!(errors, tuning, jump_force, "finite and >= 0", non_negative);
    check_field!(errors, tuning, min_jump_force, "finite and >= 0", non_negative);
    check_field!(errors, tuning, wall_jump_force, "finite and >= 0", non_negative);
    check_field!(errors, tuning, gravity, "finite and >= 0", non_negative);
    check_field!(errors, tuning, dash_speed, "finite and >= 0", non_negative);
    check_field!(errors, tuning, dash_duration, "finite and > 0", positive);
    check_field!(errors, tuning, wall_slide_factor, "within [0, 1]", unit);
    check_field!(errors, tuning, decel_factor, "within [0, 1]", unit);

    errors
}
