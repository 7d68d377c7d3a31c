//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `health` - Self-reported wellbeing records
//! - `weather` - Weather observations, WMO codes, pressure groups
//! - `analysis` - Weather sensitivity analysis over a record history
//! - `prediction` - Daily risk scoring, alerts, and forecast outlook

pub mod analysis;
pub mod foundation;
pub mod health;
pub mod prediction;
pub mod weather;
