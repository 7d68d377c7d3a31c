//! Weather Adapters
//!
//! Implementations of the ForecastProvider port.
//!
//! - **OpenMeteoProvider** - Live data from api.open-meteo.com
//! - **StaticForecastProvider** - Pre-loaded observations (testing/development)

mod open_meteo_provider;
mod static_provider;

pub use open_meteo_provider::{OpenMeteoConfig, OpenMeteoProvider};
pub use static_provider::StaticForecastProvider;
