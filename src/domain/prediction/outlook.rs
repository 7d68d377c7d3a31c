//! Multi-day forecast outlook used to flag warning dates in reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::weather::WeatherObservation;

/// Days forecast below this pressure (hPa) are warning dates.
pub const WARNING_PRESSURE_BELOW: f64 = 1005.0;

/// Warning dates within a forecast window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastOutlook {
    pub warning_dates: Vec<NaiveDate>,
    pub forecast_days: usize,
}

impl ForecastOutlook {
    /// Collects the dates whose forecast pressure is below the warning threshold.
    ///
    /// Days without a pressure reading are not flagged.
    pub fn from_forecast(days: &[WeatherObservation]) -> Self {
        let warning_dates = days
            .iter()
            .filter(|day| day.pressure_reading().is_some_and(|p| p < WARNING_PRESSURE_BELOW))
            .map(|day| day.date)
            .collect();

        Self {
            warning_dates,
            forecast_days: days.len(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warning_dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, pressure: Option<f64>) -> WeatherObservation {
        let obs = WeatherObservation::new(NaiveDate::from_ymd_opt(2026, 6, d).unwrap());
        match pressure {
            Some(p) => obs.with_pressure(p),
            None => obs,
        }
    }

    #[test]
    fn flags_only_days_below_threshold() {
        let outlook = ForecastOutlook::from_forecast(&[
            day(1, Some(1004.9)),
            day(2, Some(1005.0)),
            day(3, None),
            day(4, Some(990.0)),
        ]);

        assert_eq!(outlook.forecast_days, 4);
        assert_eq!(
            outlook.warning_dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 6, 4).unwrap()
            ]
        );
        assert!(outlook.has_warnings());
    }

    #[test]
    fn empty_forecast_has_no_warnings() {
        let outlook = ForecastOutlook::from_forecast(&[]);
        assert_eq!(outlook.forecast_days, 0);
        assert!(!outlook.has_warnings());
    }
}
