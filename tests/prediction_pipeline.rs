//! Integration tests for the analysis and prediction pipeline.
//!
//! These tests wire the application handlers to the in-memory and snapshot
//! adapters and verify:
//! 1. Sensitivity learned from history feeds the risk predictions
//! 2. Alerts and outlooks agree with the predictions
//! 3. Snapshot files round-trip through disk into a working pipeline

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde_json::json;

use precare::adapters::{InMemoryHealthRecordReader, SnapshotFile, StaticForecastProvider};
use precare::application::{
    BuildForecastOutlookHandler, BuildForecastOutlookQuery, EvaluateHealthAlertHandler,
    EvaluateHealthAlertQuery, GetWeatherSensitivityHandler, GetWeatherSensitivityQuery,
    PredictHealthRiskHandler, PredictNextDaysQuery,
};
use precare::domain::analysis::SensitivityAnalyzer;
use precare::domain::foundation::UserId;
use precare::domain::health::{HealthRecord, Mood};
use precare::domain::prediction::{RiskFactorType, RiskLevel};
use precare::domain::weather::{Location, WeatherCode, WeatherObservation};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

fn user() -> UserId {
    UserId::new("pipeline-user").unwrap()
}

fn tokyo() -> Location {
    Location::new(35.68, 139.76).unwrap()
}

/// Twenty days where mood drops on low pressure days.
fn history() -> Vec<HealthRecord> {
    (0..20)
        .map(|i| {
            let (pressure, mood) = match i % 4 {
                0 => (996.0, 2),
                1 => (1008.0, 3),
                2 => (1016.0, 4),
                _ => (1022.0, 4),
            };
            HealthRecord::new(day(-20 + i))
                .with_pressure(pressure)
                .with_mood(Mood::try_new(mood).unwrap())
        })
        .collect()
}

fn forecast() -> Vec<WeatherObservation> {
    vec![
        WeatherObservation::new(day(1))
            .with_pressure(1001.0)
            .with_weather_code(WeatherCode::new(63)),
        WeatherObservation::new(day(2)).with_pressure(1014.0),
        WeatherObservation::new(day(3)).with_pressure(1021.0),
    ]
}

async fn records() -> Arc<InMemoryHealthRecordReader> {
    let reader = InMemoryHealthRecordReader::new();
    reader.set_records(user(), history()).await;
    Arc::new(reader)
}

// =============================================================================
// Pipeline
// =============================================================================

#[tokio::test]
async fn sensitivity_feeds_predictions() {
    let records = records().await;
    let forecasts = Arc::new(StaticForecastProvider::with_observations(
        Some(WeatherObservation::new(today()).with_pressure(1013.0)),
        forecast(),
    ));

    let view = GetWeatherSensitivityHandler::new(records.clone(), SensitivityAnalyzer::default())
        .handle(GetWeatherSensitivityQuery { user_id: user() })
        .await
        .unwrap();

    // low side mean(2, 3) = 2.5, high side mean(4, 4) = 4 -> 50 + 1.5 * 25
    let profile = view.profile.unwrap();
    assert_eq!(profile.sensitivity_score.value(), 88);
    assert_eq!(profile.mood_by_pressure.len(), 4);
    assert!(profile.pressure_correlation.unwrap() > 0.0);

    let predictions =
        PredictHealthRiskHandler::new(records, forecasts, SensitivityAnalyzer::default())
            .predict_next_days(PredictNextDaysQuery {
                user_id: user(),
                location: Some(tokyo()),
                today: today(),
                days: 3,
            })
            .await;

    assert_eq!(predictions.len(), 3);

    // Day 1: 20 + 20 (1001) + 24 (12 hPa drop) + 15.2 (sensitivity 88) + 10 (rain)
    let first = &predictions[0];
    assert_eq!(first.risk_score.value(), 89);
    assert_eq!(first.risk_level, RiskLevel::Critical);
    let kinds: Vec<_> = first.factors.iter().map(|f| f.factor_type).collect();
    assert_eq!(
        kinds,
        vec![
            RiskFactorType::LowPressure,
            RiskFactorType::PressureChange,
            RiskFactorType::Rain,
        ]
    );

    // Day 3: 20 - 10 + 16 + 15.2 = 41.2
    assert_eq!(predictions[2].risk_score.value(), 41);
    assert_eq!(predictions[2].risk_level, RiskLevel::Moderate);
}

#[tokio::test]
async fn alert_and_outlook_follow_forecast() {
    let records = records().await;
    let forecasts = Arc::new(StaticForecastProvider::with_observations(
        None,
        (1..=7).map(|i| {
            let pressure = if i == 1 || i == 5 { 998.0 } else { 1016.0 };
            WeatherObservation::new(day(i)).with_pressure(pressure)
        }),
    ));

    let predictor = Arc::new(PredictHealthRiskHandler::new(
        records,
        forecasts.clone(),
        SensitivityAnalyzer::default(),
    ));

    let alert = EvaluateHealthAlertHandler::new(predictor)
        .handle(EvaluateHealthAlertQuery {
            user_id: user(),
            location: Some(tokyo()),
            today: today(),
        })
        .await
        .unwrap();

    assert_eq!(alert.data.date, day(1));
    assert!(alert.data.risk_level.triggers_alert());
    assert!(alert.body.contains("Low pressure (998 hPa)"));

    let outlook = BuildForecastOutlookHandler::new(forecasts)
        .handle(BuildForecastOutlookQuery {
            location: Some(tokyo()),
            today: today(),
            days: 7,
        })
        .await
        .unwrap();

    assert_eq!(outlook.forecast_days, 7);
    assert_eq!(outlook.warning_dates, vec![day(1), day(5)]);
}

// =============================================================================
// Snapshot files
// =============================================================================

#[tokio::test]
async fn snapshot_file_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");

    let snapshot = json!({
        "user_id": "snapshot-user",
        "location": { "latitude": 35.68, "longitude": 139.76 },
        "today": "2026-09-01",
        "records": [
            { "recorded_at": "2026-08-30", "mood": 2, "weather_pressure": 1001.5 },
            { "recorded_at": "2026-08-31", "mood": 4 }
        ],
        "current": { "date": "2026-09-01", "pressure": 1010.0 },
        "forecast": [
            { "date": "2026-09-02", "pressure": 1003.0, "weather_code": 95 }
        ]
    });
    std::fs::write(&path, snapshot.to_string()).unwrap();

    let loaded = SnapshotFile::new(&path).load().await.unwrap();
    assert_eq!(loaded.records.len(), 2);

    let records = Arc::new(loaded.record_reader().await);
    let view = GetWeatherSensitivityHandler::new(records.clone(), SensitivityAnalyzer::default())
        .handle(GetWeatherSensitivityQuery {
            user_id: loaded.user_id.clone(),
        })
        .await
        .unwrap();

    assert!(view.profile.is_none());
    assert_eq!(view.data_count, 1);
    assert_eq!(view.data_progress, 10);

    let predictions = PredictHealthRiskHandler::new(
        records,
        Arc::new(loaded.forecast_provider()),
        SensitivityAnalyzer::default(),
    )
    .predict_next_days(PredictNextDaysQuery {
        user_id: loaded.user_id.clone(),
        location: loaded.location,
        today: loaded.today,
        days: 3,
    })
    .await;

    // 20 + 20 (1003) + 14 (7 hPa drop) + 0 + 15 (thunderstorm)
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].risk_score.value(), 69);
    assert_eq!(predictions[0].risk_level_label, "Warning");
    assert_eq!(
        predictions[0].factors.last().map(|f| f.factor_type),
        Some(RiskFactorType::Thunderstorm)
    );
}

#[tokio::test]
async fn missing_snapshot_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = SnapshotFile::new(dir.path().join("absent.json")).load().await;
    assert!(result.is_err());
}
