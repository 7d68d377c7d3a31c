//! Health module - Self-reported wellbeing records.
//!
//! Records are plain data handed over by the record store; the domain only
//! decides which of them are usable for analysis.

mod mood;
mod record;

pub use mood::Mood;
pub use record::{HealthRecord, PressureMoodSample};
