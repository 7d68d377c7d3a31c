//! Sensitivity Analyzer - How strongly a person's mood follows barometric pressure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::statistics::{mean, pearson, round_to};
use super::AnalysisError;
use crate::domain::foundation::Score;
use crate::domain::health::{HealthRecord, PressureMoodSample};
use crate::domain::weather::PressureGroup;

/// Default number of analyzable records required before analysis runs.
pub const DEFAULT_MINIMUM_RECORDS: usize = 10;

/// Mood points of difference between high and low pressure that move the
/// sensitivity score by one point.
const SENSITIVITY_MULTIPLIER: f64 = 25.0;

/// Minimum number of records for a correlation coefficient.
const MIN_CORRELATION_SAMPLES: usize = 3;

/// Average mood within one pressure group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodGroupStats {
    /// Mean mood, rounded to 2 decimal places.
    pub average: f64,
    pub count: usize,
}

/// Weather sensitivity profile computed from a record history.
///
/// Recomputed on every request; never cached across record changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityProfile {
    pub sensitivity_score: Score,
    /// Pearson r between pressure and mood, rounded to 3 decimal places.
    pub pressure_correlation: Option<f64>,
    pub mood_by_pressure: BTreeMap<PressureGroup, MoodGroupStats>,
    pub data_count: usize,
}

impl SensitivityProfile {
    /// The profile used when there is not enough data to analyze.
    pub fn neutral(data_count: usize) -> Self {
        Self {
            sensitivity_score: Score::NEUTRAL,
            pressure_correlation: None,
            mood_by_pressure: BTreeMap::new(),
            data_count,
        }
    }

    /// Prose-formatted statistics, one line each, for report prompts.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("- Weather sensitivity score: {}", self.sensitivity_score)];

        if let Some(r) = self.pressure_correlation {
            lines.push(format!("- Pressure/mood correlation: {}", r));
        }

        if !self.mood_by_pressure.is_empty() {
            lines.push("- Average mood by pressure:".to_string());
            for (group, stats) in &self.mood_by_pressure {
                lines.push(format!(
                    "  - {}: {}/5 ({} records)",
                    group.label(),
                    stats.average,
                    stats.count
                ));
            }
        }

        lines
    }
}

/// Turns a record history into a [`SensitivityProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensitivityAnalyzer {
    minimum_records: usize,
}

impl SensitivityAnalyzer {
    /// Creates an analyzer requiring `minimum_records` analyzable records.
    ///
    /// A minimum of zero is raised to one.
    pub fn new(minimum_records: usize) -> Self {
        Self {
            minimum_records: minimum_records.max(1),
        }
    }

    /// Configured minimum number of analyzable records.
    pub fn required_data_count(&self) -> usize {
        self.minimum_records
    }

    /// Number of records carrying both mood and pressure.
    pub fn data_count(&self, records: &[HealthRecord]) -> usize {
        records.iter().filter(|r| r.is_analyzable()).count()
    }

    /// True when enough analyzable records exist.
    pub fn sufficient_data(&self, records: &[HealthRecord]) -> bool {
        self.data_count(records) >= self.minimum_records
    }

    /// Progress towards the minimum, 0-100.
    pub fn data_progress(&self, records: &[HealthRecord]) -> u8 {
        let count = self.data_count(records);
        let progress = (count as f64 / self.minimum_records as f64 * 100.0).round();
        progress.min(100.0) as u8
    }

    /// Average mood per pressure group. Empty groups are omitted.
    pub fn group_by_pressure(
        &self,
        records: &[HealthRecord],
    ) -> BTreeMap<PressureGroup, MoodGroupStats> {
        Self::group_samples(&Self::samples(records))
    }

    /// Computes the full sensitivity profile.
    ///
    /// # Errors
    /// `AnalysisError::InsufficientData` when fewer than the minimum number of
    /// analyzable records are present.
    pub fn analyze(&self, records: &[HealthRecord]) -> Result<SensitivityProfile, AnalysisError> {
        let samples = Self::samples(records);
        if samples.len() < self.minimum_records {
            return Err(AnalysisError::InsufficientData {
                required: self.minimum_records,
                actual: samples.len(),
            });
        }

        let mood_by_pressure = Self::group_samples(&samples);
        let sensitivity_score = Self::sensitivity_score(&mood_by_pressure);
        let pressure_correlation = Self::pressure_correlation(&samples);

        Ok(SensitivityProfile {
            sensitivity_score,
            pressure_correlation,
            mood_by_pressure,
            data_count: samples.len(),
        })
    }

    /// Combines group averages into a 0-100 score.
    ///
    /// `low_side` is the mean of the low and slightly-low averages,
    /// `high_side` the mean of normal and high. Either side missing yields 50.
    pub fn sensitivity_score(groups: &BTreeMap<PressureGroup, MoodGroupStats>) -> Score {
        let (low, high): (Vec<_>, Vec<_>) = groups.iter().partition(|(g, _)| g.is_low_side());
        let low: Vec<f64> = low.into_iter().map(|(_, s)| s.average).collect();
        let high: Vec<f64> = high.into_iter().map(|(_, s)| s.average).collect();

        match (mean(&low), mean(&high)) {
            (Some(low_side), Some(high_side)) => {
                let diff = high_side - low_side;
                Score::from_raw(50.0 + diff * SENSITIVITY_MULTIPLIER)
            }
            _ => Score::NEUTRAL,
        }
    }

    fn samples(records: &[HealthRecord]) -> Vec<PressureMoodSample> {
        records.iter().filter_map(HealthRecord::sample).collect()
    }

    fn group_samples(samples: &[PressureMoodSample]) -> BTreeMap<PressureGroup, MoodGroupStats> {
        let mut sums: BTreeMap<PressureGroup, (u32, usize)> = BTreeMap::new();
        for sample in samples {
            let entry = sums.entry(PressureGroup::classify(sample.pressure)).or_default();
            entry.0 += u32::from(sample.mood.value());
            entry.1 += 1;
        }

        sums.into_iter()
            .map(|(group, (sum, count))| {
                let average = round_to(f64::from(sum) / count as f64, 2);
                (group, MoodGroupStats { average, count })
            })
            .collect()
    }

    fn pressure_correlation(samples: &[PressureMoodSample]) -> Option<f64> {
        if samples.len() < MIN_CORRELATION_SAMPLES {
            return None;
        }

        let pressures: Vec<f64> = samples.iter().map(|s| s.pressure).collect();
        let moods: Vec<f64> = samples.iter().map(|s| f64::from(s.mood.value())).collect();

        pearson(&pressures, &moods).map(|r| round_to(r, 3))
    }
}

impl Default for SensitivityAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_RECORDS)
    }
}
