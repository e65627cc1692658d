//! Error types shared by the portable core and the platform backends.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the native desktop boundary.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("input injection failed: {0}")]
    Input(String),
    #[error("window is not ready yet")]
    WindowNotReady,
    #[error("window operation failed: {0}")]
    Window(String),
    #[error("power management failed: {0}")]
    Power(String),
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error("this platform has no GUI backend")]
    Unsupported,
}

/// Result type for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Errors produced while decoding or encoding the application icon.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon data is empty")]
    Empty,
    #[error("icon has zero size")]
    ZeroSize,
    #[error("failed to decode icon: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode icon: {0}")]
    Encode(#[source] image::ImageError),
}

/// Errors produced while reading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_error_converts_into_platform_error() {
        let err: PlatformError = IconError::Empty.into();
        assert!(matches!(err, PlatformError::Icon(IconError::Empty)));
        assert_eq!(err.to_string(), "icon data is empty");
    }

    #[test]
    fn rejected_native_image_is_a_window_error() {
        let err = PlatformError::Window("NSImage rejected icon data".into());
        assert_eq!(err.to_string(), "window operation failed: NSImage rejected icon data");
        assert!(!matches!(err, PlatformError::Icon(_)));
    }

    #[test]
    fn config_error_mentions_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
