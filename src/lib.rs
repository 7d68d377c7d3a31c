//! PreCare - Weather sensitivity analysis and health risk forecasting
//!
//! This crate learns how strongly a user's self-reported mood follows
//! barometric pressure, and combines that sensitivity with weather forecasts
//! into daily health risk predictions, alerts, and report outlooks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
