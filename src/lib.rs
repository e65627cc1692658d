//! Portable core of KeepAlive. Keep this file free of platform FFI so tests
//! can run as normal integration tests on any host.
//!
//! The native GUI glue lives under [`platform`] and is only compiled on
//! macOS and Windows.

pub mod alive;
pub mod config;
pub mod controller;
pub mod desktop;
pub mod error;
pub mod events;
pub mod icon;
pub mod logging;
pub mod model;
pub mod motion;
pub mod platform;

#[cfg(any(target_os = "macos", target_os = "windows"))]
pub mod power;

// Re-export the types most callers need
pub use alive::ActiveFlag;
pub use config::Settings;
pub use controller::Controller;
pub use desktop::Desktop;
pub use error::{ConfigError, IconError, PlatformError, PlatformResult};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{Point, Size};

/// Application name used for window titles, log files and config paths.
pub const APP_NAME: &str = "KeepAlive";

/// Reverse-DNS identifier used for power assertions.
pub const APP_REVERSE_DOMAIN: &str = "io.github.restevean.keepalive";
