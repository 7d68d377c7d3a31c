//! Proactive alert composed from a risk prediction.
//!
//! Only the decision and the payload live here; delivery belongs to the
//! notification collaborator.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{RiskLevel, RiskPrediction};
use crate::domain::foundation::Score;

const ALERT_TITLE: &str = "PreCare - Health forecast alert";
const ALERT_ICON: &str = "/icon-192.png";
const ALERT_BADGE: &str = "/badge-72.png";
const ADVICE_MAX_CHARS: usize = 50;

/// Structured data attached to an alert for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAlertData {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: NaiveDate,
    pub risk_level: RiskLevel,
    pub risk_score: Score,
}

/// Notification payload for a high-risk day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
    pub data: HealthAlertData,
}

impl HealthAlert {
    /// Builds an alert if the prediction's level warrants one.
    ///
    /// `today` decides whether the date is rendered as "Tomorrow".
    pub fn from_prediction(prediction: &RiskPrediction, today: NaiveDate) -> Option<Self> {
        if !prediction.risk_level.triggers_alert() {
            return None;
        }

        Some(Self {
            title: ALERT_TITLE.to_string(),
            body: Self::body(prediction, today),
            icon: ALERT_ICON.to_string(),
            badge: ALERT_BADGE.to_string(),
            tag: format!("health-alert-{}", prediction.date),
            data: HealthAlertData {
                kind: "health_alert".to_string(),
                date: prediction.date,
                risk_level: prediction.risk_level,
                risk_score: prediction.risk_score,
            },
        })
    }

    fn body(prediction: &RiskPrediction, today: NaiveDate) -> String {
        let date_label = if prediction.date == today + Duration::days(1) {
            "Tomorrow".to_string()
        } else {
            prediction.date.format("%-m/%-d").to_string()
        };

        let mut body = format!(
            "{} is a take-care day ({}).",
            date_label, prediction.risk_level_label
        );

        if let Some(factor) = prediction.factors.first() {
            body.push(' ');
            body.push_str(&factor.message);
            body.push('.');
        }

        body.push(' ');
        body.push_str(&truncate(&prediction.advice, ADVICE_MAX_CHARS));
        body
    }
}

/// Shortens to at most `max` characters, ending in "..." when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::RiskPredictor;
    use crate::domain::weather::{WeatherCode, WeatherObservation};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    fn prediction_for(date: NaiveDate, pressure: f64, code: u8) -> RiskPrediction {
        let forecast = WeatherObservation::new(date)
            .with_pressure(pressure)
            .with_weather_code(WeatherCode::new(code));
        RiskPredictor::predict(&forecast, None, Score::NEUTRAL)
    }

    #[test]
    fn no_alert_below_high() {
        let prediction = prediction_for(today() + Duration::days(1), 1018.0, 0);
        assert_eq!(prediction.risk_level, RiskLevel::Low);
        assert!(HealthAlert::from_prediction(&prediction, today()).is_none());
    }

    #[test]
    fn alert_for_tomorrow_mentions_first_factor() {
        let prediction = prediction_for(today() + Duration::days(1), 995.0, 61);
        let alert = HealthAlert::from_prediction(&prediction, today()).unwrap();

        assert!(alert
            .body
            .starts_with("Tomorrow is a take-care day (Warning). Low pressure (995 hPa). "));
        assert_eq!(alert.tag, "health-alert-2026-05-02");
        assert_eq!(alert.data.kind, "health_alert");
        assert_eq!(alert.data.risk_level, RiskLevel::High);
        assert_eq!(alert.data.risk_score.value(), 70);
    }

    #[test]
    fn alert_for_later_day_uses_month_and_day() {
        let prediction = prediction_for(NaiveDate::from_ymd_opt(2026, 5, 9).unwrap(), 995.0, 95);
        let alert = HealthAlert::from_prediction(&prediction, today()).unwrap();
        assert!(alert.body.starts_with("5/9 is a take-care day"));
    }

    #[test]
    fn advice_is_truncated_to_fifty_chars() {
        let prediction = prediction_for(today() + Duration::days(1), 995.0, 61);
        let alert = HealthAlert::from_prediction(&prediction, today()).unwrap();
        let shortened = truncate(&prediction.advice, 50);

        assert!(prediction.advice.chars().count() > 50);
        assert_eq!(shortened.chars().count(), 50);
        assert!(alert.body.ends_with(&shortened));
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Rest well.", 50), "Rest well.");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn alert_data_serializes_type_key() {
        let prediction = prediction_for(today() + Duration::days(1), 990.0, 99);
        let alert = HealthAlert::from_prediction(&prediction, today()).unwrap();
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["data"]["type"], "health_alert");
        assert_eq!(json["data"]["risk_level"], "critical");
    }
}
