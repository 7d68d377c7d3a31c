//! `precare` - Run the analysis and prediction pipeline over a snapshot file.
//!
//! ```text
//! precare <snapshot.json> [--live]
//! ```
//!
//! With `--live`, forecasts come from Open-Meteo for the snapshot's location
//! instead of the weather stored in the snapshot.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use precare::adapters::{OpenMeteoProvider, SnapshotFile};
use precare::application::{
    BuildForecastOutlookHandler, BuildForecastOutlookQuery, EvaluateHealthAlertHandler,
    GetWeatherSensitivityHandler, GetWeatherSensitivityQuery, PredictHealthRiskHandler,
    PredictNextDaysQuery, WeatherSensitivityView,
};
use precare::config::{AppConfig, LoggingConfig};
use precare::domain::prediction::{ForecastOutlook, HealthAlert, RiskPrediction};
use precare::ports::{ForecastProvider, HealthRecordReader};

const USAGE: &str = "usage: precare <snapshot.json> [--live]";

/// Everything the pipeline produces for one user.
#[derive(Debug, Serialize)]
struct Report {
    sensitivity: WeatherSensitivityView,
    summary: Vec<String>,
    predictions: Vec<RiskPrediction>,
    alert: Option<HealthAlert>,
    outlook: Option<ForecastOutlook>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or(USAGE)?;
    let live = args.any(|arg| arg == "--live");

    let snapshot = SnapshotFile::new(&path).load().await?;
    info!(user_id = %snapshot.user_id, records = snapshot.records.len(), live, "Snapshot loaded");

    let records: Arc<dyn HealthRecordReader> = Arc::new(snapshot.record_reader().await);
    let forecasts: Arc<dyn ForecastProvider> = if live {
        Arc::new(OpenMeteoProvider::new(config.forecast.to_open_meteo_config())?)
    } else {
        Arc::new(snapshot.forecast_provider())
    };

    let sensitivity = GetWeatherSensitivityHandler::new(records.clone(), config.analysis.analyzer())
        .handle(GetWeatherSensitivityQuery {
            user_id: snapshot.user_id.clone(),
        })
        .await?;

    let predictor =
        PredictHealthRiskHandler::new(records, forecasts.clone(), config.analysis.analyzer());
    let predictions = predictor
        .predict_next_days(PredictNextDaysQuery {
            user_id: snapshot.user_id.clone(),
            location: snapshot.location,
            today: snapshot.today,
            days: config.prediction.forecast_days,
        })
        .await;

    let alert =
        EvaluateHealthAlertHandler::alert_for(&snapshot.user_id, &predictions, snapshot.today);

    let outlook = BuildForecastOutlookHandler::new(forecasts)
        .handle(BuildForecastOutlookQuery {
            location: snapshot.location,
            today: snapshot.today,
            days: config.prediction.outlook_days,
        })
        .await;

    if let Some(outlook) = outlook.as_ref().filter(|o| o.has_warnings()) {
        info!(warning_days = outlook.warning_dates.len(), "Low pressure ahead");
    }

    let summary = sensitivity
        .profile
        .as_ref()
        .map(|profile| profile.summary_lines())
        .unwrap_or_else(|| {
            vec![format!(
                "Collecting data: {} of {} records ({}%), {} more needed",
                sensitivity.data_count,
                sensitivity.required_data_count,
                sensitivity.data_progress,
                sensitivity.remaining_records()
            )]
        });

    let report = Report {
        sensitivity,
        summary,
        predictions,
        alert,
        outlook,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
