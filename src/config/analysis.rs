//! Sensitivity analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{SensitivityAnalyzer, DEFAULT_MINIMUM_RECORDS};

/// Sensitivity analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Analyzable records required before a profile is computed
    #[serde(default = "default_minimum_records")]
    pub minimum_records: usize,
}

impl AnalysisConfig {
    /// Build the analyzer this configuration describes
    pub fn analyzer(&self) -> SensitivityAnalyzer {
        SensitivityAnalyzer::new(self.minimum_records)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.minimum_records == 0 {
            return Err(ValidationError::InvalidMinimumRecords);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            minimum_records: default_minimum_records(),
        }
    }
}

fn default_minimum_records() -> usize {
    DEFAULT_MINIMUM_RECORDS
}
