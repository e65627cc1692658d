//! Logging setup with file output for release builds.

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::paths;

/// Environment variable that overrides every other log filter.
pub const LOG_ENV_VAR: &str = "KEEPALIVE_LOG";

/// Name prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "keepalive.log";

/// Filter directive used when neither the environment nor the settings
/// specify one.
pub fn default_directive() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Pick the filter: `KEEPALIVE_LOG`, then `configured`, then the build default.
pub fn build_filter(configured: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return filter;
    }
    configured
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive()))
}

/// Initialize logging with console and, in release builds, file output.
///
/// In release mode, logs are written to:
/// - macOS: ~/Library/Application Support/KeepAlive/logs/
/// - Windows: %APPDATA%\KeepAlive\logs\
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(configured: Option<&str>) {
    let is_production = !cfg!(debug_assertions);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(build_filter(configured));

    let file_layer = if is_production {
        paths::log_dir().and_then(|log_dir| {
            if let Err(e) = std::fs::create_dir_all(&log_dir) {
                eprintln!("Warning: failed to create log directory {log_dir:?}: {e}");
                return None;
            }
            let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(appender)
                    .with_filter(build_filter(configured)),
            )
        })
    } else {
        None
    };

    let file_enabled = file_layer.is_some();
    let result = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if result.is_err() {
        return;
    }
    if file_enabled {
        tracing::info!("File logging enabled: {:?}", paths::log_dir());
    }
    tracing::info!("Logging initialized (production={is_production})");
}
