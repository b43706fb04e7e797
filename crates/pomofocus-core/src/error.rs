//! Core error types for pomofocus-core.
//!
//! Timer operations themselves never fail. Errors come from parsing user
//! input into timer modes, restoring a timer state, and the configuration
//! file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomofocus-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timer-related errors
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Timer-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The supplied value does not name one of the three timer modes.
    #[error("invalid timer mode '{value}' (expected work, short_break or long_break)")]
    InvalidMode { value: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Remaining time does not fit the mode's duration
    #[error("remaining_seconds {remaining} exceeds the {mode} duration of {duration}s")]
    RemainingOutOfRange {
        mode: String,
        remaining: u32,
        duration: u32,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_mode_message_names_the_value() {
        let err = TimerError::InvalidMode {
            value: "nap".into(),
        };
        assert!(err.to_string().contains("'nap'"));
    }

    #[test]
    fn timer_error_converts_into_core_error() {
        let err: CoreError = TimerError::InvalidMode {
            value: "x".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Timer(_)));
    }
}
