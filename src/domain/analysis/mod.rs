//! Analysis Module - Pure domain services over a record history.
//!
//! # Components
//!
//! - `SensitivityAnalyzer` - Weather sensitivity score, pressure/mood
//!   correlation, and per-pressure-group mood averages
//! - `statistics` - Mean, Pearson correlation, and decimal rounding
//!
//! All functions are pure and stateless apart from the analyzer's configured
//! minimum record count. They take already-materialized records as input.

mod errors;
mod sensitivity_analyzer;
pub mod statistics;

pub use errors::AnalysisError;
pub use sensitivity_analyzer::{
    MoodGroupStats, SensitivityAnalyzer, SensitivityProfile, DEFAULT_MINIMUM_RECORDS,
};
