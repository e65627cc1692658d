//! Filesystem locations.
//!
//! - macOS: ~/Library/Application Support/KeepAlive/
//! - Windows: %APPDATA%\KeepAlive\
//! - Linux: ~/.config/KeepAlive/

use std::path::PathBuf;

use crate::APP_NAME;

/// Name of the settings file inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Per-user application directory.
pub fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Full path of the settings file.
pub fn config_file() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Directory for rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("logs"))
}
