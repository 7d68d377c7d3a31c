//! Prediction query handlers.
//!
//! Handlers that combine forecasts with the user's sensitivity.

mod build_forecast_outlook;
mod evaluate_health_alert;
mod predict_health_risk;

pub use build_forecast_outlook::{
    BuildForecastOutlookHandler, BuildForecastOutlookQuery, DEFAULT_OUTLOOK_DAYS,
};
pub use evaluate_health_alert::{EvaluateHealthAlertHandler, EvaluateHealthAlertQuery};
pub use predict_health_risk::{
    PredictForDateQuery, PredictHealthRiskHandler, PredictNextDaysQuery, DEFAULT_PREDICTION_DAYS,
};
