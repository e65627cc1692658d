//! Platform-specific implementations.
//!
//! Each backend provides:
//! - `run(options)`: create the window and button, block in the native loop
//! - `set_app_icon(png)`: install the application icon
//! - a [`Desktop`](crate::desktop::Desktop) implementation for the alive loop

use crate::config::Settings;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "macos")]
pub use macos::{run, set_app_icon};

#[cfg(target_os = "windows")]
pub use windows::{run, set_app_icon};

/// Everything the GUI needs before it starts.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub settings: Settings,
    /// Encoded application icon (PNG). Empty means no icon.
    pub icon_png: Vec<u8>,
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn run(_options: RunOptions) -> crate::error::PlatformResult<()> {
    Err(crate::error::PlatformError::Unsupported)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn set_app_icon(png: &[u8]) -> crate::error::PlatformResult<()> {
    crate::icon::IconImage::from_png(png)?;
    Err(crate::error::PlatformError::Unsupported)
}
