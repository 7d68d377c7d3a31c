//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An integer score between 0 and 100 inclusive.
///
/// Used for both the sensitivity score and the daily risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);

    /// Neutral midpoint of the scale.
    pub const NEUTRAL: Self = Self(50);

    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Creates a new Score, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX.0))
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX.0 {
            return Err(ValidationError::out_of_range("score", 0, 100, value as i32));
        }
        Ok(Self(value))
    }

    /// Rounds a raw computed value half away from zero and clamps it into 0..=100.
    ///
    /// Non-finite inputs collapse to the neutral score.
    pub fn from_raw(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::NEUTRAL;
        }
        Self(raw.round().clamp(f64::from(Self::MIN.0), f64::from(Self::MAX.0)) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}
