//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Minimum record count must be at least 1")]
    InvalidMinimumRecords,

    #[error("Prediction days must be between 1 and {max}")]
    InvalidPredictionDays { max: u32 },

    #[error("Invalid forecast request timeout")]
    InvalidTimeout,

    #[error("Invalid forecast base URL format")]
    InvalidForecastUrl,

    #[error("Too many forecast retries (max {max})")]
    TooManyRetries { max: u32 },
}
