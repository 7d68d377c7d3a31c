//! Human-readable contributors to a risk prediction.

use serde::{Deserialize, Serialize};

/// Kind of contributing factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorType {
    LowPressure,
    SlightlyLowPressure,
    PressureChange,
    Rain,
    Thunderstorm,
}

impl RiskFactorType {
    /// Factors that make a high-risk day "pressure-driven".
    pub fn is_pressure_driven(&self) -> bool {
        matches!(self, RiskFactorType::LowPressure | RiskFactorType::PressureChange)
    }
}

/// A contributing factor shown verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    #[serde(rename = "type")]
    pub factor_type: RiskFactorType,
    pub message: String,
}

impl RiskFactor {
    pub fn new(factor_type: RiskFactorType, message: impl Into<String>) -> Self {
        Self {
            factor_type,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_driven_factors() {
        assert!(RiskFactorType::LowPressure.is_pressure_driven());
        assert!(RiskFactorType::PressureChange.is_pressure_driven());
        assert!(!RiskFactorType::SlightlyLowPressure.is_pressure_driven());
        assert!(!RiskFactorType::Rain.is_pressure_driven());
    }

    #[test]
    fn serializes_type_field() {
        let factor = RiskFactor::new(RiskFactorType::Rain, "Rain in the forecast");
        let json = serde_json::to_value(&factor).unwrap();
        assert_eq!(json["type"], "rain");
        assert_eq!(json["message"], "Rain in the forecast");
    }
}
