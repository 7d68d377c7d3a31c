//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HealthRecordReader` - The user's historical wellbeing records
//! - `ForecastProvider` - Current weather and daily forecasts for a location

mod forecast_provider;
mod health_record_reader;

pub use forecast_provider::{ForecastError, ForecastProvider};
pub use health_record_reader::{HealthRecordReader, RecordReaderError};
