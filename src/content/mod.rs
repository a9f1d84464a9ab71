//! Content domain: data-driven movement tuning loaded at startup.

mod loader;
mod validation;

pub use loader::{TuningLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::MovementTuning;

/// Default location of the tuning file, relative to the working directory.
pub const TUNING_FILE: &str = "assets/data/movement_tuning.ron";

/// Loads [`MovementTuning`] from a RON file, keeping the built-in defaults
/// when the file is missing or invalid.
pub struct ContentPlugin {
    pub tuning_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            tuning_path: PathBuf::from(TUNING_FILE),
        }
    }
}

#[derive(Resource, Debug, Clone)]
struct TuningSource(PathBuf);

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TuningSource(self.tuning_path.clone()))
            .init_resource::<MovementTuning>()
            .add_systems(PreStartup, load_movement_tuning);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, reload_tuning_hotkey);
    }
}

fn load_movement_tuning(source: Res<TuningSource>, mut tuning: ResMut<MovementTuning>) {
    match load_tuning(&source.0) {
        Ok(loaded) => {
            info!(
                "Loaded movement tuning from {}: max_speed={}, jump_force={}, gravity={}, jump height ~{:.0}px",
                source.0.display(),
                loaded.max_speed,
                loaded.jump_force,
                loaded.gravity,
                loaded.single_jump_height()
            );
            *tuning = loaded;
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
        }
    }
}

/// Ctrl+T re-reads the tuning file so values can be tweaked while running.
#[cfg(feature = "dev-tools")]
fn reload_tuning_hotkey(
    keyboard: Res<ButtonInput<KeyCode>>,
    source: Res<TuningSource>,
    mut tuning: ResMut<MovementTuning>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.just_pressed(KeyCode::KeyT) {
        return;
    }

    match load_tuning(&source.0) {
        Ok(loaded) => {
            *tuning = loaded;
            info!("[DEBUG] Reloaded movement tuning from {}", source.0.display());
        }
        Err(e) => warn!("[DEBUG] {}; keeping current tuning", e),
    }
}
