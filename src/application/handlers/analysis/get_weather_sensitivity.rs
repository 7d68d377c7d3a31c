//! GetWeatherSensitivityHandler - Query handler for a user's sensitivity profile.
//!
//! Loads the user's records, reports how far data collection has come, and
//! runs the analysis once enough records exist.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::analysis::{AnalysisError, SensitivityAnalyzer, SensitivityProfile};
use crate::domain::foundation::UserId;
use crate::ports::{HealthRecordReader, RecordReaderError};

/// Query to get the weather sensitivity of a user.
#[derive(Debug, Clone)]
pub struct GetWeatherSensitivityQuery {
    pub user_id: UserId,
}

/// Sensitivity profile plus data-collection progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSensitivityView {
    /// `None` until enough analyzable records exist.
    pub profile: Option<SensitivityProfile>,
    pub data_count: usize,
    pub required_data_count: usize,
    /// 0-100
    pub data_progress: u8,
}

impl WeatherSensitivityView {
    /// Records still needed before a profile is available.
    pub fn remaining_records(&self) -> usize {
        self.required_data_count.saturating_sub(self.data_count)
    }
}

/// Handler for retrieving a sensitivity profile.
pub struct GetWeatherSensitivityHandler {
    reader: Arc<dyn HealthRecordReader>,
    analyzer: SensitivityAnalyzer,
}

impl GetWeatherSensitivityHandler {
    pub fn new(reader: Arc<dyn HealthRecordReader>, analyzer: SensitivityAnalyzer) -> Self {
        Self { reader, analyzer }
    }

    pub async fn handle(
        &self,
        query: GetWeatherSensitivityQuery,
    ) -> Result<WeatherSensitivityView, RecordReaderError> {
        let records = self
            .reader
            .records_for_user(&query.user_id)
            .await
            .map_err(|e| {
                warn!(user_id = %query.user_id, error = %e, "Failed to load records");
                e
            })?;

        let profile = match self.analyzer.analyze(&records) {
            Ok(profile) => Some(profile),
            Err(err @ AnalysisError::InsufficientData { .. }) => {
                debug!(
                    user_id = %query.user_id,
                    remaining = err.remaining(),
                    "Not enough records for sensitivity analysis"
                );
                None
            }
        };

        Ok(WeatherSensitivityView {
            profile,
            data_count: self.analyzer.data_count(&records),
            required_data_count: self.analyzer.required_data_count(),
            data_progress: self.analyzer.data_progress(&records),
        })
    }
}
