//! Health record as supplied by the record store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Mood;
use crate::domain::weather::PressureGroup;

/// One self-reported entry per calendar day.
///
/// Only the fields the analysis engine reads are modelled here; the record
/// store may carry more (sleep, weight, notes) without affecting the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub recorded_at: NaiveDate,
    #[serde(default)]
    pub mood: Option<Mood>,
    /// Surface pressure in hPa associated with the day.
    #[serde(default)]
    pub weather_pressure: Option<f64>,
}

/// A record reduced to the two values the sensitivity analysis needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureMoodSample {
    pub pressure: f64,
    pub mood: Mood,
}

impl HealthRecord {
    /// Creates a record with no mood or pressure yet.
    pub fn new(recorded_at: NaiveDate) -> Self {
        Self {
            recorded_at,
            mood: None,
            weather_pressure: None,
        }
    }

    /// Sets the mood score.
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Sets the surface pressure.
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.weather_pressure = Some(pressure);
        self
    }

    /// The recorded pressure, ignoring non-finite values.
    pub fn pressure_reading(&self) -> Option<f64> {
        self.weather_pressure.filter(|p| p.is_finite())
    }

    /// Returns the pressure/mood pair when both are present.
    pub fn sample(&self) -> Option<PressureMoodSample> {
        match (self.pressure_reading(), self.mood) {
            (Some(pressure), Some(mood)) => Some(PressureMoodSample { pressure, mood }),
            _ => None,
        }
    }

    /// True when the record can take part in sensitivity analysis.
    pub fn is_analyzable(&self) -> bool {
        self.sample().is_some()
    }

    /// Pressure band of this day, if a pressure was recorded.
    pub fn pressure_group(&self) -> Option<PressureGroup> {
        self.pressure_reading().map(PressureGroup::classify)
    }
}
