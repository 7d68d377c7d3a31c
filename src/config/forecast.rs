//! Forecast provider configuration (Open-Meteo)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::OpenMeteoConfig;

/// Forecast provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// IANA timezone used to align daily values
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries after a failed request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl ForecastConfig {
    /// Convert to the adapter configuration
    pub fn to_open_meteo_config(&self) -> OpenMeteoConfig {
        OpenMeteoConfig::new()
            .with_base_url(self.base_url.clone())
            .with_timezone(self.timezone.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_retries(self.max_retries)
    }

    /// Validate forecast configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidForecastUrl);
        }
        if self.timezone.trim().is_empty() {
            return Err(ValidationError::MissingRequired("forecast.timezone"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > 5 {
            return Err(ValidationError::TooManyRetries { max: 5 });
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timezone: default_timezone(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_timezone() -> String {
    "Asia/Tokyo".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_config_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(config.timezone, "Asia/Tokyo");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_open_meteo_config() {
        let config = ForecastConfig {
            base_url: "http://localhost:9999/v1/forecast".to_string(),
            timezone: "Europe/Berlin".to_string(),
            timeout_secs: 3,
            max_retries: 0,
        };

        let adapter = config.to_open_meteo_config();
        assert_eq!(adapter.base_url, "http://localhost:9999/v1/forecast");
        assert_eq!(adapter.timezone, "Europe/Berlin");
        assert_eq!(adapter.timeout, Duration::from_secs(3));
        assert_eq!(adapter.max_retries, 0);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ForecastConfig {
            base_url: "api.open-meteo.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidForecastUrl));
    }

    #[test]
    fn test_invalid_timeout() {
        let config = ForecastConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_too_many_retries() {
        let config = ForecastConfig {
            max_retries: 9,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TooManyRetries { .. })
        ));
    }
}
