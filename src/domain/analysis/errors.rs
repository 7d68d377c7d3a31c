//! Analysis error types.

use thiserror::Error;

/// Errors raised by the sensitivity analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Sensitivity analysis requires at least {required} records with mood and pressure, found {actual}")]
    InsufficientData { required: usize, actual: usize },
}

impl AnalysisError {
    /// Number of additional analyzable records needed before analysis can run.
    pub fn remaining(&self) -> usize {
        match self {
            AnalysisError::InsufficientData { required, actual } => {
                required.saturating_sub(*actual)
            }
        }
    }
}
