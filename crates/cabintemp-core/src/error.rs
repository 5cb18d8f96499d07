//! Error types for cabintemp-core.
//!
//! Nothing here is allowed to take down the host simulator: telemetry and
//! persistence failures are absorbed at the tick boundary and degrade to a
//! status line or a logged diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// Umbrella error type for cabintemp-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings persistence errors
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Telemetry read errors
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    /// User input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings-persistence errors.
///
/// A missing settings file is not an error (defaults apply); these cover
/// the cases where the store genuinely cannot do its job.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The per-user preferences directory could not be resolved or created
    #[error("Failed to prepare settings directory: {0}")]
    DirUnavailable(String),

    /// Failed to write the settings file
    #[error("Failed to save settings to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to serialize the settings record
    #[error("Failed to serialize settings: {0}")]
    SerializeFailed(String),
}

/// Telemetry read errors. Always recovered locally within a tick.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// The named signal does not exist in the simulator
    #[error("Signal '{0}' not found")]
    SignalNotFound(String),

    /// The signal exists but could not be read this tick
    #[error("Failed to read signal '{0}'")]
    ReadFailed(String),
}

/// User input validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Non-numeric or otherwise unparsable input
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Numeric input outside the accepted range
    #[error("Value {value} for '{field}' outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
