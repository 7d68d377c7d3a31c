//! Static Forecast Provider
//!
//! Serves pre-loaded observations from memory. Useful for testing,
//! development, and replaying a stored snapshot.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::weather::{Location, WeatherObservation};
use crate::ports::{ForecastError, ForecastProvider};

/// In-memory forecast provider keyed by date. Ignores the location.
#[derive(Debug, Clone, Default)]
pub struct StaticForecastProvider {
    current: Arc<RwLock<Option<WeatherObservation>>>,
    daily: Arc<RwLock<BTreeMap<NaiveDate, WeatherObservation>>>,
    failure: Arc<RwLock<Option<ForecastError>>>,
}

impl StaticForecastProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider pre-loaded with current weather and daily observations
    pub fn with_observations(
        current: Option<WeatherObservation>,
        daily: impl IntoIterator<Item = WeatherObservation>,
    ) -> Self {
        let daily = daily.into_iter().map(|obs| (obs.date, obs)).collect();
        Self {
            current: Arc::new(RwLock::new(current)),
            daily: Arc::new(RwLock::new(daily)),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the current weather
    pub async fn set_current(&self, current: Option<WeatherObservation>) {
        *self.current.write().await = current;
    }

    /// Add or replace the observation for its date
    pub async fn insert(&self, observation: WeatherObservation) {
        self.daily.write().await.insert(observation.date, observation);
    }

    /// Make every subsequent call fail with `error` (None restores normal behavior)
    pub async fn fail_with(&self, error: Option<ForecastError>) {
        *self.failure.write().await = error;
    }

    async fn check_failure(&self) -> Result<(), ForecastError> {
        match self.failure.read().await.as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ForecastProvider for StaticForecastProvider {
    async fn current_weather(
        &self,
        _location: &Location,
    ) -> Result<Option<WeatherObservation>, ForecastError> {
        self.check_failure().await?;
        Ok(self.current.read().await.clone())
    }

    async fn forecast_for_date(
        &self,
        _location: &Location,
        date: NaiveDate,
    ) -> Result<Option<WeatherObservation>, ForecastError> {
        self.check_failure().await?;
        Ok(self.daily.read().await.get(&date).cloned())
    }

    async fn forecast_days(
        &self,
        _location: &Location,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<WeatherObservation>, ForecastError> {
        self.check_failure().await?;
        let daily = self.daily.read().await;
        Ok((1..=i64::from(days))
            .filter_map(|offset| daily.get(&(today + Duration::days(offset))).cloned())
            .collect())
    }
}
