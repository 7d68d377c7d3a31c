//! PredictHealthRiskHandler - Query handler for upcoming health risk.
//!
//! Combines the user's sensitivity (from their record history), the current
//! weather, and the daily forecast into per-day risk predictions. Collaborator
//! failures never surface to the caller: they degrade to fewer inputs or to an
//! empty result.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::analysis::SensitivityAnalyzer;
use crate::domain::foundation::{Score, UserId};
use crate::domain::prediction::{RiskPrediction, RiskPredictor, DEFAULT_SENSITIVITY};
use crate::domain::weather::{Location, WeatherObservation};
use crate::ports::{ForecastProvider, HealthRecordReader};

/// Default number of forecast days predicted.
pub const DEFAULT_PREDICTION_DAYS: u32 = 3;

/// Query for predictions over the next `days` days after `today`.
#[derive(Debug, Clone)]
pub struct PredictNextDaysQuery {
    pub user_id: UserId,
    /// Users without a configured location get no predictions.
    pub location: Option<Location>,
    pub today: NaiveDate,
    pub days: u32,
}

/// Query for a prediction on one specific date.
#[derive(Debug, Clone)]
pub struct PredictForDateQuery {
    pub user_id: UserId,
    pub location: Option<Location>,
    pub date: NaiveDate,
}

/// Handler for health risk predictions.
pub struct PredictHealthRiskHandler {
    records: Arc<dyn HealthRecordReader>,
    forecasts: Arc<dyn ForecastProvider>,
    analyzer: SensitivityAnalyzer,
}

impl PredictHealthRiskHandler {
    pub fn new(
        records: Arc<dyn HealthRecordReader>,
        forecasts: Arc<dyn ForecastProvider>,
        analyzer: SensitivityAnalyzer,
    ) -> Self {
        Self {
            records,
            forecasts,
            analyzer,
        }
    }

    /// Predicts risk for each forecast day after `today`, in date order.
    pub async fn predict_next_days(&self, query: PredictNextDaysQuery) -> Vec<RiskPrediction> {
        let Some(location) = query.location else {
            debug!(user_id = %query.user_id, "No location set, skipping prediction");
            return Vec::new();
        };

        let forecast = match self
            .forecasts
            .forecast_days(&location, query.today, query.days)
            .await
        {
            Ok(days) => days,
            Err(e) => {
                warn!(user_id = %query.user_id, error = %e, "Forecast unavailable");
                return Vec::new();
            }
        };

        if forecast.is_empty() {
            return Vec::new();
        }

        let current = self.current_weather(&location).await;
        let sensitivity = self.user_sensitivity(&query.user_id).await;

        debug!(
            user_id = %query.user_id,
            days = forecast.len(),
            sensitivity = sensitivity.value(),
            has_current = current.is_some(),
            "Predicting health risk"
        );

        RiskPredictor::predict_many(&forecast, current.as_ref(), sensitivity)
    }

    /// Predicts risk for a single date, or `None` when no forecast exists for it.
    pub async fn predict_for_date(&self, query: PredictForDateQuery) -> Option<RiskPrediction> {
        let location = query.location?;

        let forecast = match self.forecasts.forecast_for_date(&location, query.date).await {
            Ok(Some(forecast)) => forecast,
            Ok(None) => return None,
            Err(e) => {
                warn!(user_id = %query.user_id, date = %query.date, error = %e, "Forecast unavailable");
                return None;
            }
        };

        let current = self.current_weather(&location).await;
        let sensitivity = self.user_sensitivity(&query.user_id).await;

        Some(RiskPredictor::predict(&forecast, current.as_ref(), sensitivity))
    }

    async fn current_weather(&self, location: &Location) -> Option<WeatherObservation> {
        match self.forecasts.current_weather(location).await {
            Ok(current) => current,
            Err(e) => {
                warn!(error = %e, "Current weather unavailable, ignoring pressure change");
                None
            }
        }
    }

    /// The user's sensitivity score, or the neutral default when it cannot be computed.
    async fn user_sensitivity(&self, user_id: &UserId) -> Score {
        let records = match self.records.records_for_user(user_id).await {
            Ok(records) => records,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Records unavailable, using default sensitivity");
                return DEFAULT_SENSITIVITY;
            }
        };

        self.analyzer
            .analyze(&records)
            .map(|profile| profile.sensitivity_score)
            .unwrap_or(DEFAULT_SENSITIVITY)
    }
}
