//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation here is a read: records and forecasts come in, profiles,
//! predictions, alerts, and outlooks go out.

pub mod handlers;

pub use handlers::{
    // Analysis
    GetWeatherSensitivityHandler, GetWeatherSensitivityQuery, WeatherSensitivityView,
    // Prediction
    BuildForecastOutlookHandler, BuildForecastOutlookQuery, EvaluateHealthAlertHandler,
    EvaluateHealthAlertQuery, PredictForDateQuery, PredictHealthRiskHandler, PredictNextDaysQuery,
    DEFAULT_OUTLOOK_DAYS, DEFAULT_PREDICTION_DAYS,
};
