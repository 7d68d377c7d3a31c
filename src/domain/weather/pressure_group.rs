//! Pressure bands used to bucket historical records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Partition of surface pressure (hPa) into four bands.
///
/// | group        | range          |
/// |--------------|----------------|
/// | low          | < 1000         |
/// | slightly_low | [1000, 1013)   |
/// | normal       | [1013, 1020)   |
/// | high         | >= 1020        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureGroup {
    Low,
    SlightlyLow,
    Normal,
    High,
}

impl PressureGroup {
    /// Classifies a pressure reading.
    pub fn classify(pressure: f64) -> Self {
        if pressure < 1000.0 {
            PressureGroup::Low
        } else if pressure < 1013.0 {
            PressureGroup::SlightlyLow
        } else if pressure < 1020.0 {
            PressureGroup::Normal
        } else {
            PressureGroup::High
        }
    }

    /// True for the two groups below normal pressure.
    pub fn is_low_side(&self) -> bool {
        matches!(self, PressureGroup::Low | PressureGroup::SlightlyLow)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PressureGroup::Low => "Low",
            PressureGroup::SlightlyLow => "Slightly low",
            PressureGroup::Normal => "Normal",
            PressureGroup::High => "High",
        }
    }

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PressureGroup::Low => "low",
            PressureGroup::SlightlyLow => "slightly_low",
            PressureGroup::Normal => "normal",
            PressureGroup::High => "high",
        }
    }
}

impl fmt::Display for PressureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
