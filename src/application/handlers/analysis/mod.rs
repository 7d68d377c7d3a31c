//! Analysis query handlers.
//!
//! Handlers that load a user's record history and run the sensitivity analysis.

mod get_weather_sensitivity;

pub use get_weather_sensitivity::{
    GetWeatherSensitivityHandler, GetWeatherSensitivityQuery, WeatherSensitivityView,
};
