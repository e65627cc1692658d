//! User settings.
//!
//! Settings live in a JSON file (see [`paths::config_file`]). Every field is
//! optional in the file; missing fields take their defaults. A missing file
//! is not an error, an unreadable or malformed one is reported and replaced
//! by defaults.

pub mod paths;
mod settings;

pub use settings::{MotionSettings, Settings, TimingSettings};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigError;

/// Load settings from `path`, validating the result.
///
/// Returns defaults when the file does not exist.
pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut settings: Settings =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    settings.validate();
    Ok(settings)
}

/// Load settings from the default location.
///
/// Returns defaults when the platform has no config directory or the file
/// does not exist. Callers decide how to report an error; logging may not
/// be initialized yet because the log level itself comes from here.
pub fn load() -> Result<Settings, ConfigError> {
    match paths::config_file() {
        Some(path) => load_from(&path),
        None => Ok(Settings::default()),
    }
}
