//! Application handlers.
//!
//! Query handlers that orchestrate domain services over the ports.

pub mod analysis;
pub mod prediction;

pub use analysis::{GetWeatherSensitivityHandler, GetWeatherSensitivityQuery, WeatherSensitivityView};
pub use prediction::{
    BuildForecastOutlookHandler, BuildForecastOutlookQuery, EvaluateHealthAlertHandler,
    EvaluateHealthAlertQuery, PredictForDateQuery, PredictHealthRiskHandler, PredictNextDaysQuery,
    DEFAULT_OUTLOOK_DAYS, DEFAULT_PREDICTION_DAYS,
};
