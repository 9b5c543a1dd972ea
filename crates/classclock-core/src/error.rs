//! Core error types for classclock-core.
//!
//! Only configuration loading can fail. Once a [`Timetable`](crate::Timetable)
//! has been built, resolving and rendering are infallible.

use std::path::PathBuf;
use thiserror::Error;

use crate::calendar::DayKey;

/// Core error type for classclock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Timetable text that is not valid TOML or does not fit the schema
    #[error("Invalid timetable TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Timetable could not be rendered as TOML
    #[error("Failed to serialize timetable: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// A period would end at or past midnight
    #[error("Schedule for {day} overflows midnight at period {period}")]
    ScheduleOverflow { day: DayKey, period: u32 },

    /// The data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// A time-of-day string that is not a zero-padded `HH:MM` value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid time '{input}': expected zero-padded HH:MM")]
pub struct TimeFormatError {
    pub input: String,
}

impl TimeFormatError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
