//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `records` - Record store implementations (in-memory)
//! - `weather` - Forecast providers (Open-Meteo, static)
//! - `snapshot` - JSON snapshot files for offline runs

pub mod records;
pub mod snapshot;
pub mod weather;

pub use records::InMemoryHealthRecordReader;
pub use snapshot::{Snapshot, SnapshotError, SnapshotFile};
pub use weather::{OpenMeteoConfig, OpenMeteoProvider, StaticForecastProvider};
