//! Weather observations and the location they were fetched for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WeatherCode;
use crate::domain::foundation::ValidationError;

/// Daily (or current) weather as supplied by the forecast provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub date: NaiveDate,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<u8>,
    /// Surface pressure in hPa; absent when the provider had no data.
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<WeatherCode>,
    #[serde(default)]
    pub weather_description: String,
}

impl WeatherObservation {
    /// Creates an observation with no measurements.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            temperature: None,
            humidity: None,
            pressure: None,
            weather_code: None,
            weather_description: String::new(),
        }
    }

    /// Sets the surface pressure.
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    /// The surface pressure, ignoring non-finite values.
    pub fn pressure_reading(&self) -> Option<f64> {
        self.pressure.filter(|p| p.is_finite())
    }

    /// Sets the weather code and derives the description from it.
    pub fn with_weather_code(mut self, code: WeatherCode) -> Self {
        self.weather_code = Some(code);
        self.weather_description = code.description().to_string();
        self
    }

    /// Sets temperature (°C) and relative humidity (%), either of which may be unknown.
    pub fn with_conditions(mut self, temperature: Option<f64>, humidity: Option<u8>) -> Self {
        self.temperature = temperature;
        self.humidity = humidity;
        self
    }
}

/// Geographic coordinates a forecast is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a location, validating coordinate ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::invalid_format(
                "latitude",
                format!("{} is outside -90..=90", latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::invalid_format(
                "longitude",
                format!("{} is outside -180..=180", longitude),
            ));
        }
        Ok(Self { latitude, longitude })
    }
}

#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawLocation> for Location {
    type Error = ValidationError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Location::new(raw.latitude, raw.longitude)
    }
}
