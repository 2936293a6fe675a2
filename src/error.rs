//! Error handling for Hillside Viewer
//!
//! One error type for the whole crate. Camera placement, config loading and
//! keyframe loading all report through `ViewerError` instead of panicking or
//! producing NaN state.

use glam::Vec3;
use thiserror::Error;

/// Main error type for Hillside Viewer
#[derive(Debug, Error)]
pub enum ViewerError {
    // Camera Errors
    #[error("Degenerate camera placement: eye {eye:?} coincides with look-at point")]
    DegenerateCameraPlacement { eye: Vec3 },

    // Configuration Errors
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Config parse error in {path}: {error}")]
    ConfigParse { path: String, error: String },

    // Input Errors
    #[error("Unknown key name: '{key}'")]
    UnknownKey { key: String },
    #[error("Unknown input action: '{name}'")]
    UnknownAction { name: String },

    // Scene Errors
    #[error("Character slot {index} does not exist ({count} slots)")]
    UnknownCharacter { index: usize, count: usize },

    // Keyframe Errors
    #[error("Keyframe parse error on line {line}: {reason}")]
    KeyframeParse { line: usize, reason: String },
    #[error("No keyframes could be loaded from {source_name}")]
    NoKeyframes { source_name: String },

    // System Errors
    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },
}

/// Type alias for Results in Hillside Viewer
pub type ViewerResult<T> = Result<T, ViewerError>;

impl From<std::io::Error> for ViewerError {
    fn from(error: std::io::Error) -> Self {
        ViewerError::Io {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ViewerError {
    fn from(error: toml::de::Error) -> Self {
        ViewerError::ConfigParse {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_viewer<F>(self, f: F) -> ViewerResult<T>
    where
        F: FnOnce() -> ViewerError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_viewer<F>(self, f: F) -> ViewerResult<T>
    where
        F: FnOnce() -> ViewerError,
    {
        self.ok_or_else(f)
    }
}

/// Attach a file path to IO and parse errors raised while reading it
pub trait PathContext<T> {
    fn with_path(self, path: &std::path::Path) -> ViewerResult<T>;
}

impl<T> PathContext<T> for ViewerResult<T> {
    fn with_path(self, path: &std::path::Path) -> ViewerResult<T> {
        let shown = path.display().to_string();
        self.map_err(|err| match err {
            ViewerError::Io { error, .. } => ViewerError::Io { path: shown, error },
            ViewerError::ConfigParse { error, .. } => ViewerError::ConfigParse { path: shown, error },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_display() {
        let err = ViewerError::InvalidConfig {
            field: "world.size".to_string(),
            value: "-1".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid config: world.size = -1 (must be positive)"
        );
    }

    #[test]
    fn test_option_ext() {
        let opt: Option<i32> = None;
        let result = opt.ok_or_viewer(|| ViewerError::UnknownCharacter { index: 3, count: 1 });
        assert!(matches!(
            result,
            Err(ViewerError::UnknownCharacter { index: 3, count: 1 })
        ));
    }

    #[test]
    fn test_path_context_fills_in_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let result: ViewerResult<()> = Err(io.into());
        match result.with_path(Path::new("assets/tour.txt")) {
            Err(ViewerError::Io { path, .. }) => assert_eq!(path, "assets/tour.txt"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
