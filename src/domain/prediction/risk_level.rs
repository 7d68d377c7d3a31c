//! Risk level bands for the daily risk score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Score;

/// Qualitative risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// Inclusive score ranges per level. Contiguous and covering 0..=100.
pub const RISK_LEVEL_BANDS: [(RiskLevel, u8, u8); 4] = [
    (RiskLevel::Low, 0, 25),
    (RiskLevel::Moderate, 26, 50),
    (RiskLevel::High, 51, 75),
    (RiskLevel::Critical, 76, 100),
];

impl RiskLevel {
    /// Looks up the band containing `score`, falling back to `Moderate`.
    pub fn from_score(score: Score) -> Self {
        let value = score.value();
        RISK_LEVEL_BANDS
            .iter()
            .find(|(_, min, max)| (*min..=*max).contains(&value))
            .map(|(level, _, _)| *level)
            .unwrap_or(RiskLevel::Moderate)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Good",
            RiskLevel::Moderate => "Caution",
            RiskLevel::High => "Warning",
            RiskLevel::Critical => "Danger",
        }
    }

    /// Returns the icon name used by the UI.
    pub fn icon(&self) -> &'static str {
        match self {
            RiskLevel::Low => "check-circle",
            RiskLevel::Moderate => "info-circle",
            RiskLevel::High => "exclamation-triangle",
            RiskLevel::Critical => "exclamation-circle",
        }
    }

    /// Levels at which a proactive alert should be sent.
    pub fn triggers_alert(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_score_maps_to_exactly_one_band() {
        for value in 0..=100u8 {
            let matching = RISK_LEVEL_BANDS
                .iter()
                .filter(|(_, min, max)| (*min..=*max).contains(&value))
                .count();
            assert_eq!(matching, 1, "score {} matched {} bands", value, matching);
        }
    }

    #[test]
    fn band_edges() {
        assert_eq!(RiskLevel::from_score(Score::new(0)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(Score::new(25)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(Score::new(26)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(Score::new(50)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(Score::new(51)), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(Score::new(75)), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(Score::new(76)), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(Score::new(100)), RiskLevel::Critical);
    }

    #[test]
    fn only_high_and_critical_trigger_alerts() {
        assert!(!RiskLevel::Low.triggers_alert());
        assert!(!RiskLevel::Moderate.triggers_alert());
        assert!(RiskLevel::High.triggers_alert());
        assert!(RiskLevel::Critical.triggers_alert());
    }

    #[test]
    fn labels_and_icons() {
        assert_eq!(RiskLevel::High.label(), "Warning");
        assert_eq!(RiskLevel::Critical.icon(), "exclamation-circle");
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&RiskLevel::Moderate).unwrap(), "\"moderate\"");
    }
}
