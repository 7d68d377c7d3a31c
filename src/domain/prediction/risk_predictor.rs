//! Risk Predictor - Daily health risk from forecast pressure and personal sensitivity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RiskFactor, RiskFactorType, RiskLevel};
use crate::domain::foundation::Score;
use crate::domain::weather::{WeatherCode, WeatherObservation};

/// Sensitivity assumed when no profile is available.
pub const DEFAULT_SENSITIVITY: Score = Score::NEUTRAL;

/// Score reported for a day whose forecast has no pressure.
const MISSING_PRESSURE_RISK: u8 = 20;

const BASE_RISK: f64 = 20.0;

/// hPa of swing between now and the forecast day -> risk points, capped.
const CHANGE_MULTIPLIER: f64 = 2.0;
const CHANGE_CAP: f64 = 30.0;

/// Risk points a fully sensitive (100) or insensitive (0) user moves from neutral.
const SENSITIVITY_WEIGHT: f64 = 20.0;

/// Factor thresholds (hPa). Deliberately distinct from the pressure groups.
const LOW_PRESSURE_NOTE_BELOW: f64 = 1005.0;
const SLIGHTLY_LOW_PRESSURE_NOTE_BELOW: f64 = 1010.0;
const PRESSURE_CHANGE_NOTE_MIN: i64 = 10;

const ADVICE_CRITICAL: &str =
    "Take extra care of your condition today. Keep headache medicine at hand and keep your plans light.";
const ADVICE_HIGH_PRESSURE: &str =
    "Watch out for pressure-related discomfort. Having headache medicine ready is recommended.";
const ADVICE_HIGH_GENERAL: &str = "Look after your health and make sure to get plenty of rest.";
const ADVICE_MODERATE: &str =
    "You can go about your day as usual, but stay aware of changes in how you feel.";
const ADVICE_LOW: &str = "Pleasant weather is expected. It should be a comfortable day.";

/// Risk assessment for one forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub date: NaiveDate,
    pub risk_score: Score,
    pub risk_level: RiskLevel,
    pub risk_level_label: String,
    pub risk_level_icon: String,
    pub factors: Vec<RiskFactor>,
    pub advice: String,
    /// The forecast the prediction was made from.
    pub forecast: WeatherObservation,
}

/// Scoring rules that turn a forecast day into a [`RiskPrediction`].
///
/// Never fails: missing pressure, current weather, or weather code only reduce
/// the precision of the score.
pub struct RiskPredictor;

impl RiskPredictor {
    /// Predicts risk for a single forecast day.
    pub fn predict(
        forecast: &WeatherObservation,
        current: Option<&WeatherObservation>,
        sensitivity: Score,
    ) -> RiskPrediction {
        let risk_score = Self::risk_score(forecast, current, sensitivity);
        let risk_level = RiskLevel::from_score(risk_score);
        let factors = Self::identify_factors(forecast, current);
        let advice = Self::advice(risk_level, &factors).to_string();

        RiskPrediction {
            date: forecast.date,
            risk_score,
            risk_level,
            risk_level_label: risk_level.label().to_string(),
            risk_level_icon: risk_level.icon().to_string(),
            factors,
            advice,
            forecast: forecast.clone(),
        }
    }

    /// Predicts each day in order, sharing the same current weather and sensitivity.
    pub fn predict_many(
        forecast_days: &[WeatherObservation],
        current: Option<&WeatherObservation>,
        sensitivity: Score,
    ) -> Vec<RiskPrediction> {
        forecast_days
            .iter()
            .map(|day| Self::predict(day, current, sensitivity))
            .collect()
    }

    /// Computes the 0-100 risk score.
    ///
    /// `base + pressure + change + sensitivity + weather`, rounded then clamped.
    pub fn risk_score(
        forecast: &WeatherObservation,
        current: Option<&WeatherObservation>,
        sensitivity: Score,
    ) -> Score {
        let Some(pressure) = forecast.pressure_reading() else {
            return Score::new(MISSING_PRESSURE_RISK);
        };

        let current_pressure = current.and_then(WeatherObservation::pressure_reading);
        let raw = BASE_RISK
            + Self::pressure_factor(pressure)
            + Self::change_factor(current_pressure, pressure)
            + Self::sensitivity_factor(sensitivity)
            + Self::weather_factor(forecast.weather_code);

        Score::from_raw(raw)
    }

    /// Stepped contribution of the forecast pressure.
    pub fn pressure_factor(pressure: f64) -> f64 {
        if pressure < 1000.0 {
            40.0
        } else if pressure < 1010.0 {
            20.0
        } else if pressure < 1015.0 {
            10.0
        } else if pressure < 1020.0 {
            0.0
        } else {
            -10.0
        }
    }

    /// Contribution of the swing between current and forecast pressure.
    pub fn change_factor(current_pressure: Option<f64>, forecast_pressure: f64) -> f64 {
        match current_pressure {
            Some(current) => {
                ((current - forecast_pressure).abs() * CHANGE_MULTIPLIER).min(CHANGE_CAP)
            }
            None => 0.0,
        }
    }

    /// Maps sensitivity 0..=100 onto -20..=+20, centred on 50.
    pub fn sensitivity_factor(sensitivity: Score) -> f64 {
        (f64::from(sensitivity.value()) - 50.0) / 50.0 * SENSITIVITY_WEIGHT
    }

    /// Contribution of the forecast weather code.
    pub fn weather_factor(code: Option<WeatherCode>) -> f64 {
        match code {
            Some(c) if c.is_rain() => 10.0,
            Some(c) if c.is_thunderstorm() => 15.0,
            Some(c) if c.is_snow() => 5.0,
            _ => 0.0,
        }
    }

    /// Lists contributing factors: pressure level, then pressure change, then weather.
    pub fn identify_factors(
        forecast: &WeatherObservation,
        current: Option<&WeatherObservation>,
    ) -> Vec<RiskFactor> {
        let mut factors = Vec::new();

        if let Some(pressure) = forecast.pressure_reading() {
            let rounded = pressure.round() as i64;
            if pressure < LOW_PRESSURE_NOTE_BELOW {
                factors.push(RiskFactor::new(
                    RiskFactorType::LowPressure,
                    format!("Low pressure ({} hPa)", rounded),
                ));
            } else if pressure < SLIGHTLY_LOW_PRESSURE_NOTE_BELOW {
                factors.push(RiskFactor::new(
                    RiskFactorType::SlightlyLowPressure,
                    format!("Slightly low pressure ({} hPa)", rounded),
                ));
            }
        }

        if let (Some(now), Some(then)) = (
            current.and_then(WeatherObservation::pressure_reading),
            forecast.pressure_reading(),
        ) {
            let change = (now - then).round() as i64;
            if change.abs() >= PRESSURE_CHANGE_NOTE_MIN {
                let direction = if change > 0 { "falling" } else { "rising" };
                factors.push(RiskFactor::new(
                    RiskFactorType::PressureChange,
                    format!("Pressure forecast {} by {} hPa", direction, change.abs()),
                ));
            }
        }

        match forecast.weather_code {
            Some(code) if code.is_rain() => {
                factors.push(RiskFactor::new(RiskFactorType::Rain, "Rain in the forecast"));
            }
            Some(code) if code.is_thunderstorm() => {
                factors.push(RiskFactor::new(
                    RiskFactorType::Thunderstorm,
                    "Thunderstorms in the forecast",
                ));
            }
            _ => {}
        }

        factors
    }

    /// Selects the advice text for a level.
    pub fn advice(level: RiskLevel, factors: &[RiskFactor]) -> &'static str {
        match level {
            RiskLevel::Critical => ADVICE_CRITICAL,
            RiskLevel::High => {
                if factors.iter().any(|f| f.factor_type.is_pressure_driven()) {
                    ADVICE_HIGH_PRESSURE
                } else {
                    ADVICE_HIGH_GENERAL
                }
            }
            RiskLevel::Moderate => ADVICE_MODERATE,
            RiskLevel::Low => ADVICE_LOW,
        }
    }
}
