//! ForecastProvider port - Current, historical, and forecast weather.
//!
//! Implementations own network I/O, timeouts, and retries. Callers in the
//! application layer treat every error as "no data" and degrade gracefully.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::weather::{Location, WeatherObservation};

/// Errors that can occur when fetching weather
#[derive(Debug, Clone, thiserror::Error)]
pub enum ForecastError {
    #[error("Weather request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Weather API error: {0}")]
    Api(String),

    #[error("Failed to parse weather response: {0}")]
    Parse(String),
}

impl ForecastError {
    /// Creates an API error.
    pub fn api(message: impl Into<String>) -> Self {
        ForecastError::Api(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        ForecastError::Parse(message.into())
    }

    /// Returns true for failures worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ForecastError::Timeout { .. } | ForecastError::Api(_))
    }
}

/// Supplies weather observations for a location.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Weather right now, used as the reference for pressure change.
    ///
    /// Returns `Ok(None)` when the provider has no current data.
    async fn current_weather(
        &self,
        location: &Location,
    ) -> Result<Option<WeatherObservation>, ForecastError>;

    /// Daily observation for a single date (past or future).
    async fn forecast_for_date(
        &self,
        location: &Location,
        date: NaiveDate,
    ) -> Result<Option<WeatherObservation>, ForecastError>;

    /// `days` consecutive daily forecasts starting the day after `today`.
    async fn forecast_days(
        &self,
        location: &Location,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<WeatherObservation>, ForecastError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_and_api_errors_are_retryable() {
        assert!(ForecastError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(ForecastError::api("503").is_retryable());
        assert!(!ForecastError::parse("missing daily").is_retryable());
    }
}
