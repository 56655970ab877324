//! Core error types for stresscast-core.
//!
//! Load and export failures surface as [`CoreError`]. Problems confined to a
//! single CSV row are [`RowError`]s; they are collected as skipped rows and
//! never abort a whole load.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stresscast-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// CSV header lacks a required column
    #[error("CSV header in {} is missing column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read configuration
    #[error("Failed to load configuration from {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Why a single input row was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// Row has fewer fields than the header
    #[error("missing field '{field}'")]
    MissingField { field: String },

    /// Field is present but not a finite number
    #[error("invalid number for '{field}': {value:?}")]
    InvalidNumber { field: String, value: String },

    /// Row could not be decoded at all
    #[error("unreadable row: {0}")]
    Unreadable(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
