//! Loader for the RON movement tuning file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::validation::{ValidationError, validate_tuning};
use crate::movement::MovementTuning;

/// Error type for tuning load failures.
#[derive(Debug)]
pub enum TuningLoadError {
    Io { file: String, message: String },
    Parse { file: String, message: String },
    Invalid { file: String, errors: Vec<ValidationError> },
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningLoadError::Io { file, message } => {
                write!(f, "Failed to read {}: {}", file, message)
            }
            TuningLoadError::Parse { file, message } => {
                write!(f, "Failed to parse {}: {}", file, message)
            }
            TuningLoadError::Invalid { file, errors } => {
                write!(f, "Invalid tuning in {}: ", file)?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for TuningLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning from RON text. Fields left out keep their
/// default values.
pub fn parse_tuning(contents: &str, file: &str) -> Result<MovementTuning, TuningLoadError> {
    let tuning: MovementTuning = ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })?;

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        return Err(TuningLoadError::Invalid {
            file: file.to_string(),
            errors,
        });
    }

    Ok(tuning)
}

/// Load movement tuning from a RON file.
pub fn load_tuning(path: &Path) -> Result<MovementTuning, TuningLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError::Io {
        file: file.clone(),
        message: e.to_string(),
    })?;

    parse_tuning(&contents, &file)
}
