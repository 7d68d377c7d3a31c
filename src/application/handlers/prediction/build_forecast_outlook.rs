//! BuildForecastOutlookHandler - Warning dates over the coming week.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::prediction::ForecastOutlook;
use crate::domain::weather::Location;
use crate::ports::ForecastProvider;

/// Days covered by a report outlook.
pub const DEFAULT_OUTLOOK_DAYS: u32 = 7;

/// Query for the outlook after `today`.
#[derive(Debug, Clone)]
pub struct BuildForecastOutlookQuery {
    pub location: Option<Location>,
    pub today: NaiveDate,
    pub days: u32,
}

/// Handler for forecast outlooks used in reports.
pub struct BuildForecastOutlookHandler {
    forecasts: Arc<dyn ForecastProvider>,
}

impl BuildForecastOutlookHandler {
    pub fn new(forecasts: Arc<dyn ForecastProvider>) -> Self {
        Self { forecasts }
    }

    /// Returns `None` when there is no location or the forecast is unavailable.
    pub async fn handle(&self, query: BuildForecastOutlookQuery) -> Option<ForecastOutlook> {
        let location = query.location?;

        match self
            .forecasts
            .forecast_days(&location, query.today, query.days)
            .await
        {
            Ok(days) => Some(ForecastOutlook::from_forecast(&days)),
            Err(e) => {
                warn!(error = %e, "Forecast unavailable, skipping outlook");
                None
            }
        }
    }
}
