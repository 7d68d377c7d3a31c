//! Prediction window configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::{DEFAULT_OUTLOOK_DAYS, DEFAULT_PREDICTION_DAYS};

/// Longest window the forecast provider serves.
const MAX_FORECAST_DAYS: u32 = 16;

/// Prediction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    /// Days predicted after today
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,

    /// Days covered by report outlooks
    #[serde(default = "default_outlook_days")]
    pub outlook_days: u32,
}

impl PredictionConfig {
    /// Validate prediction configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for days in [self.forecast_days, self.outlook_days] {
            if days == 0 || days > MAX_FORECAST_DAYS {
                return Err(ValidationError::InvalidPredictionDays {
                    max: MAX_FORECAST_DAYS,
                });
            }
        }
        Ok(())
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            forecast_days: default_forecast_days(),
            outlook_days: default_outlook_days(),
        }
    }
}

fn default_forecast_days() -> u32 {
    DEFAULT_PREDICTION_DAYS
}

fn default_outlook_days() -> u32 {
    DEFAULT_OUTLOOK_DAYS
}
