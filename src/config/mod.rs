//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PRECARE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use precare::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Predicting {} days ahead", config.prediction.forecast_days);
//! ```

mod analysis;
mod error;
mod forecast;
mod logging;
mod prediction;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use forecast::ForecastConfig;
pub use logging::LoggingConfig;
pub use prediction::PredictionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Sensitivity analysis (minimum record count)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Prediction and outlook windows
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Forecast provider (Open-Meteo)
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PRECARE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PRECARE__ANALYSIS__MINIMUM_RECORDS=14` -> `analysis.minimum_records = 14`
    /// - `PRECARE__FORECAST__TIMEZONE=Europe/Berlin` -> `forecast.timezone = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PRECARE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.prediction.validate()?;
        self.forecast.validate()?;
        Ok(())
    }
}
