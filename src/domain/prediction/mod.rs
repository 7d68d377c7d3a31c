//! Prediction Module - Forward-looking daily health risk.
//!
//! # Components
//!
//! - `RiskPredictor` - Scores a forecast day against current weather and the
//!   user's sensitivity, with factors and advice
//! - `RiskLevel` - Inclusive score bands (low / moderate / high / critical)
//! - `HealthAlert` - Alert decision and payload for high-risk days
//! - `ForecastOutlook` - Warning dates over a forecast window
//!
//! Like the analysis module, everything here is pure and synchronous.

mod alert;
mod outlook;
mod risk_factor;
mod risk_level;
mod risk_predictor;

pub use alert::{HealthAlert, HealthAlertData};
pub use outlook::{ForecastOutlook, WARNING_PRESSURE_BELOW};
pub use risk_factor::{RiskFactor, RiskFactorType};
pub use risk_level::{RiskLevel, RISK_LEVEL_BANDS};
pub use risk_predictor::{RiskPrediction, RiskPredictor, DEFAULT_SENSITIVITY};
