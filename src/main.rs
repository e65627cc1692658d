//! KeepAlive entry point.
//!
//! Loads settings, sets up logging and the event bus, prepares the icon and
//! hands the main thread to the platform backend.

use std::fs;
use std::process::ExitCode;

use tracing::{error, info, warn};

use keepalive::config::{self, Settings};
use keepalive::icon::{IconImage, DEFAULT_ICON_SIZE};
use keepalive::platform::{self, RunOptions};
use keepalive::{events, logging};

fn main() -> ExitCode {
    let (settings, config_error) = match config::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    logging::init(settings.log_level.as_deref());
    if let Some(e) = config_error {
        warn!("{e}; using default settings");
    }

    events::init_event_bus();

    let icon_png = load_icon(&settings);
    info!("starting {} {}", keepalive::APP_NAME, env!("CARGO_PKG_VERSION"));

    match platform::run(RunOptions { settings, icon_png }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Icon bytes from `icon_path` if it decodes, otherwise the built-in badge.
fn load_icon(settings: &Settings) -> Vec<u8> {
    if let Some(path) = &settings.icon_path {
        match fs::read(path) {
            Ok(bytes) => match IconImage::from_png(&bytes) {
                Ok(_) => return bytes,
                Err(e) => warn!("ignoring icon {}: {e}", path.display()),
            },
            Err(e) => warn!("cannot read icon {}: {e}", path.display()),
        }
    }

    match IconImage::badge(DEFAULT_ICON_SIZE).to_png() {
        Ok(png) => png,
        Err(e) => {
            warn!("could not render the default icon: {e}");
            Vec::new()
        }
    }
}
