//! EvaluateHealthAlertHandler - Decides whether tomorrow warrants an alert.
//!
//! Runs a one-day prediction and composes the alert payload when the level
//! is high or critical. Delivery is left to the caller.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::{PredictHealthRiskHandler, PredictNextDaysQuery};
use crate::domain::foundation::UserId;
use crate::domain::prediction::{HealthAlert, RiskPrediction};
use crate::domain::weather::Location;

/// Query to evaluate the alert for the day after `today`.
#[derive(Debug, Clone)]
pub struct EvaluateHealthAlertQuery {
    pub user_id: UserId,
    pub location: Option<Location>,
    pub today: NaiveDate,
}

/// Handler for the proactive alert decision.
pub struct EvaluateHealthAlertHandler {
    predictions: Arc<PredictHealthRiskHandler>,
}

impl EvaluateHealthAlertHandler {
    pub fn new(predictions: Arc<PredictHealthRiskHandler>) -> Self {
        Self { predictions }
    }

    pub async fn handle(&self, query: EvaluateHealthAlertQuery) -> Option<HealthAlert> {
        let predictions = self
            .predictions
            .predict_next_days(PredictNextDaysQuery {
                user_id: query.user_id.clone(),
                location: query.location,
                today: query.today,
                days: 1,
            })
            .await;

        Self::alert_for(&query.user_id, &predictions, query.today)
    }

    /// Alert for the first of already computed predictions.
    pub fn alert_for(
        user_id: &UserId,
        predictions: &[RiskPrediction],
        today: NaiveDate,
    ) -> Option<HealthAlert> {
        let alert = HealthAlert::from_prediction(predictions.first()?, today)?;

        info!(
            user_id = %user_id,
            date = %alert.data.date,
            risk_level = alert.data.risk_level.as_str(),
            "Health alert raised"
        );

        Some(alert)
    }
}
