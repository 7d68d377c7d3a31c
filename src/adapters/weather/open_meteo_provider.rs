//! Open-Meteo Provider - Implementation of ForecastProvider for api.open-meteo.com.
//!
//! Daily values use the `*_mean` aggregates (temperature, relative humidity,
//! surface pressure) plus the dominant WMO weather code.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenMeteoConfig::new()
//!     .with_timezone("Asia/Tokyo")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let provider = OpenMeteoProvider::new(config)?;
//! ```

use async_trait::async_trait;
use chrono::{Duration as DateDuration, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::weather::{Location, WeatherCode, WeatherObservation};
use crate::ports::{ForecastError, ForecastProvider};

/// Description used when the API omits the weather code.
const UNKNOWN_WEATHER: &str = "Unknown";

/// Historical daily data is only served this many days back.
const MAX_PAST_DAYS: i64 = 92;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,surface_pressure,weather_code";
const DAILY_FIELDS: &str =
    "temperature_2m_mean,relative_humidity_2m_mean,surface_pressure_mean,weather_code";

/// Configuration for the Open-Meteo provider.
#[derive(Debug, Clone)]
pub struct OpenMeteoConfig {
    /// Forecast endpoint (default: https://api.open-meteo.com/v1/forecast).
    pub base_url: String,
    /// IANA timezone used to align daily buckets.
    pub timezone: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl OpenMeteoConfig {
    pub fn new() -> Self {
        Self {
            base_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            timezone: "Asia/Tokyo".to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Open-Meteo forecast provider.
pub struct OpenMeteoProvider {
    config: OpenMeteoConfig,
    client: Client,
}

impl OpenMeteoProvider {
    /// Creates a provider with the given configuration.
    ///
    /// # Errors
    /// Returns `ForecastError::Api` if the HTTP client cannot be built.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ForecastError::api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn base_params(&self, location: &Location) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("timezone", self.config.timezone.clone()),
        ]
    }

    fn daily_params(
        &self,
        location: &Location,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<(&'static str, String)> {
        let mut params = self.base_params(location);
        params.push(("daily", DAILY_FIELDS.to_string()));
        params.push(("start_date", start.to_string()));
        params.push(("end_date", end.to_string()));
        params
    }

    /// Sends one GET request and decodes the JSON body.
    async fn send_request<T: for<'de> Deserialize<'de>>(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<T, ForecastError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ForecastError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    ForecastError::api(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::api(format!("API returned status {}", status.as_u16())));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ForecastError::parse(e.to_string()))
    }

    /// Sends a request, retrying transient failures with exponential backoff.
    async fn fetch<T: for<'de> Deserialize<'de>>(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<T, ForecastError> {
        let mut retry_count = 0;

        loop {
            match self.send_request(params).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        tracing::error!("Open-Meteo request failed: {}", err);
                        return Err(err);
                    }
                    tracing::warn!(retry = retry_count + 1, "Open-Meteo request failed: {}", err);
                }
            }

            // Exponential backoff: 500ms, 1s, 2s, ...
            sleep(Duration::from_millis(500 << retry_count)).await;
            retry_count += 1;
        }
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn current_weather(
        &self,
        location: &Location,
    ) -> Result<Option<WeatherObservation>, ForecastError> {
        let mut params = self.base_params(location);
        params.push(("current", CURRENT_FIELDS.to_string()));

        let body: CurrentResponse = self.fetch(&params).await?;
        Ok(parse_current(body, Utc::now().date_naive()))
    }

    async fn forecast_for_date(
        &self,
        location: &Location,
        date: NaiveDate,
    ) -> Result<Option<WeatherObservation>, ForecastError> {
        match DateRequest::for_date(date, Utc::now().date_naive()) {
            DateRequest::Current => self.current_weather(location).await,
            DateRequest::TooOld => {
                tracing::warn!(%date, "Date is more than {} days ago, skipping", MAX_PAST_DAYS);
                Ok(None)
            }
            DateRequest::Daily => {
                let body: DailyResponse =
                    self.fetch(&self.daily_params(location, date, date)).await?;
                Ok(parse_daily(body)?.into_iter().next())
            }
        }
    }

    async fn forecast_days(
        &self,
        location: &Location,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<WeatherObservation>, ForecastError> {
        if days == 0 {
            return Ok(Vec::new());
        }

        let start = today + DateDuration::days(1);
        let end = today + DateDuration::days(i64::from(days));
        let body: DailyResponse = self.fetch(&self.daily_params(location, start, end)).await?;
        parse_daily(body)
    }
}

/// Which endpoint serves a single-date lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateRequest {
    /// Today is served by the current-conditions block.
    Current,
    Daily,
    /// Older than the archive window.
    TooOld,
}

impl DateRequest {
    fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        if date == today {
            DateRequest::Current
        } else if (today - date).num_days() > MAX_PAST_DAYS {
            DateRequest::TooOld
        } else {
            DateRequest::Daily
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Open-Meteo API Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Option<CurrentBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: Option<String>,
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    surface_pressure: Option<f64>,
    weather_code: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: Option<DailyBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_mean: Vec<Option<f64>>,
    #[serde(default)]
    relative_humidity_2m_mean: Vec<Option<f64>>,
    #[serde(default)]
    surface_pressure_mean: Vec<Option<f64>>,
    #[serde(default)]
    weather_code: Vec<Option<u8>>,
}

fn humidity(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

fn observation(
    date: NaiveDate,
    temperature: Option<f64>,
    humidity_pct: Option<f64>,
    pressure: Option<f64>,
    code: Option<u8>,
) -> WeatherObservation {
    let mut obs =
        WeatherObservation::new(date).with_conditions(temperature, humidity_pct.map(humidity));
    if let Some(p) = pressure {
        obs = obs.with_pressure(p);
    }
    match code {
        Some(c) => obs.with_weather_code(WeatherCode::new(c)),
        None => WeatherObservation {
            weather_description: UNKNOWN_WEATHER.to_string(),
            ..obs
        },
    }
}

fn parse_current(body: CurrentResponse, fallback_date: NaiveDate) -> Option<WeatherObservation> {
    let current = body.current?;
    let date = current
        .time
        .as_deref()
        .and_then(|t| t.get(..10))
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .unwrap_or(fallback_date);

    Some(observation(
        date,
        current.temperature_2m,
        current.relative_humidity_2m,
        current.surface_pressure,
        current.weather_code,
    ))
}

fn parse_daily(body: DailyResponse) -> Result<Vec<WeatherObservation>, ForecastError> {
    let Some(daily) = body.daily else {
        return Ok(Vec::new());
    };

    let at = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten();

    daily
        .time
        .iter()
        .enumerate()
        .map(|(i, time)| {
            let date = NaiveDate::parse_from_str(time, "%Y-%m-%d")
                .map_err(|e| ForecastError::parse(format!("invalid date '{}': {}", time, e)))?;
            Ok(observation(
                date,
                at(&daily.temperature_2m_mean, i),
                at(&daily.relative_humidity_2m_mean, i),
                at(&daily.surface_pressure_mean, i),
                daily.weather_code.get(i).copied().flatten(),
            ))
        })
        .collect()
}
