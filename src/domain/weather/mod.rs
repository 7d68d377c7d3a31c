//! Weather module - Observations, WMO codes, and pressure bands.

mod observation;
mod pressure_group;
mod weather_code;

pub use observation::{Location, WeatherObservation};
pub use pressure_group::PressureGroup;
pub use weather_code::WeatherCode;
