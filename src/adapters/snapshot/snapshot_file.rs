//! JSON snapshot of one user's records and weather, read from disk.
//!
//! Lets the command-line tool run the full pipeline without a live record
//! store or forecast API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::adapters::records::InMemoryHealthRecordReader;
use crate::adapters::weather::StaticForecastProvider;
use crate::domain::foundation::UserId;
use crate::domain::health::HealthRecord;
use crate::domain::weather::{Location, WeatherObservation};

/// Errors that can occur while reading or writing a snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode snapshot {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything needed to analyze and predict for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub user_id: UserId,
    #[serde(default)]
    pub location: Option<Location>,
    /// The day predictions are made from; forecasts start the day after.
    pub today: NaiveDate,
    #[serde(default)]
    pub records: Vec<HealthRecord>,
    #[serde(default)]
    pub current: Option<WeatherObservation>,
    #[serde(default)]
    pub forecast: Vec<WeatherObservation>,
}

impl Snapshot {
    /// Record store holding this snapshot's records
    pub async fn record_reader(&self) -> InMemoryHealthRecordReader {
        let reader = InMemoryHealthRecordReader::new();
        reader.set_records(self.user_id.clone(), self.records.clone()).await;
        reader
    }

    /// Forecast provider serving this snapshot's weather
    pub fn forecast_provider(&self) -> StaticForecastProvider {
        StaticForecastProvider::with_observations(self.current.clone(), self.forecast.clone())
    }
}

/// Snapshot stored as a JSON file
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and decode the snapshot
    pub async fn load(&self) -> Result<Snapshot, SnapshotError> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|source| SnapshotError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|source| SnapshotError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Encode and write a snapshot
    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let json = self.encode(snapshot)?;

        fs::write(&self.path, json)
            .await
            .map_err(|source| SnapshotError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(value).map_err(|source| SnapshotError::Encode {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ForecastProvider, HealthRecordReader};

    const SAMPLE: &str = r#"{
        "user_id": "user-42",
        "location": {"latitude": 35.68, "longitude": 139.76},
        "today": "2026-02-01",
        "records": [
            {"recorded_at": "2026-01-30", "mood": 2, "weather_pressure": 998.0},
            {"recorded_at": "2026-01-31", "mood": 4}
        ],
        "current": {"date": "2026-02-01", "pressure": 1015.0},
        "forecast": [
            {"date": "2026-02-02", "pressure": 995.0, "weather_code": 61, "weather_description": "Slight rain"}
        ]
    }"#;

    #[tokio::test]
    async fn load_reads_json_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let snapshot = SnapshotFile::new(&path).load().await.unwrap();
        assert_eq!(snapshot.user_id.as_str(), "user-42");
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.forecast[0].pressure, Some(995.0));

        let reader = snapshot.record_reader().await;
        let records = reader.records_for_user(&snapshot.user_id).await.unwrap();
        assert_eq!(records.len(), 2);

        let provider = snapshot.forecast_provider();
        let location = snapshot.location.unwrap();
        let days = provider.forecast_days(&location, snapshot.today, 3).await.unwrap();
        assert_eq!(days.len(), 1);
    }

    #[tokio::test]
    async fn save_then_load_preserves_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("out.json"));
        let snapshot: Snapshot = serde_json::from_str(SAMPLE).unwrap();

        file.save(&snapshot).await.unwrap();
        let loaded = file.load().await.unwrap();
        assert_eq!(loaded.records, snapshot.records);
        assert_eq!(loaded.today, snapshot.today);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SnapshotFile::new(dir.path().join("absent.json")).load().await;
        assert!(matches!(result, Err(SnapshotError::Io { .. })));
    }

    #[tokio::test]
    async fn invalid_mood_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"user_id":"u","today":"2026-02-01","records":[{"recorded_at":"2026-01-01","mood":9}]}"#,
        )
        .unwrap();

        let result = SnapshotFile::new(&path).load().await;
        assert!(matches!(result, Err(SnapshotError::Parse { .. })));
    }

    #[tokio::test]
    async fn out_of_range_location_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_location.json");
        std::fs::write(
            &path,
            r#"{"user_id":"u","today":"2026-02-01","location":{"latitude":500.0,"longitude":0.0}}"#,
        )
        .unwrap();

        let result = SnapshotFile::new(&path).load().await;
        assert!(matches!(result, Err(SnapshotError::Parse { .. })));
    }

    #[test]
    fn serialization_failure_is_encode_error() {
        let file = SnapshotFile::new("snapshot.json");
        let mut unencodable = std::collections::HashMap::new();
        unencodable.insert((1u8, 2u8), 3u8);

        let err = file.encode(&unencodable).unwrap_err();
        assert!(matches!(err, SnapshotError::Encode { .. }));
        assert!(err.to_string().starts_with("Failed to encode snapshot snapshot.json"));
    }
}
