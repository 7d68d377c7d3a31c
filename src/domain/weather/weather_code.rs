//! WMO weather interpretation codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// WMO numeric weather code (0 = clear sky ... 99 = thunderstorm with heavy hail).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(u8);

impl WeatherCode {
    /// Wraps a raw WMO code. Unknown codes are kept and described as "Unknown".
    pub fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Rain and rain showers.
    pub fn is_rain(&self) -> bool {
        matches!(self.0, 61 | 63 | 65 | 80 | 81 | 82)
    }

    /// Thunderstorm, with or without hail.
    pub fn is_thunderstorm(&self) -> bool {
        matches!(self.0, 95 | 96 | 99)
    }

    /// Snow fall and snow showers.
    pub fn is_snow(&self) -> bool {
        matches!(self.0, 71 | 73 | 75 | 85 | 86)
    }

    /// Human readable description.
    pub fn description(&self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Fog",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Drizzle",
            55 => "Dense drizzle",
            56 => "Light freezing drizzle",
            57 => "Freezing drizzle",
            61 => "Slight rain",
            63 => "Rain",
            65 => "Heavy rain",
            66 => "Light freezing rain",
            67 => "Freezing rain",
            71 => "Slight snow",
            73 => "Snow",
            75 => "Heavy snow",
            77 => "Snow grains",
            80 => "Slight rain showers",
            81 => "Rain showers",
            82 => "Violent rain showers",
            85 => "Slight snow showers",
            86 => "Snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with slight hail",
            99 => "Thunderstorm with heavy hail",
            _ => "Unknown",
        }
    }

    /// Emoji icon for compact display.
    pub fn icon(&self) -> &'static str {
        match self.0 {
            0 => "☀️",
            1 | 2 => "🌤️",
            3 => "☁️",
            45 | 48 => "🌫️",
            51 | 53 | 55 | 56 | 57 => "🌧️",
            61 | 63 | 65 | 66 | 67 => "🌧️",
            71 | 73 | 75 | 77 => "❄️",
            80 | 81 | 82 => "🌦️",
            85 | 86 => "🌨️",
            95 | 96 | 99 => "⛈️",
            _ => "🌡️",
        }
    }
}

impl From<u8> for WeatherCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_codes_are_rain_only() {
        for code in [61, 63, 65, 80, 81, 82] {
            let code = WeatherCode::new(code);
            assert!(code.is_rain());
            assert!(!code.is_thunderstorm());
            assert!(!code.is_snow());
        }
    }

    #[test]
    fn thunderstorm_codes() {
        for code in [95, 96, 99] {
            assert!(WeatherCode::new(code).is_thunderstorm());
        }
        assert!(!WeatherCode::new(94).is_thunderstorm());
    }

    #[test]
    fn snow_codes() {
        for code in [71, 73, 75, 85, 86] {
            assert!(WeatherCode::new(code).is_snow());
        }
        // Snow grains are not counted as snow fall.
        assert!(!WeatherCode::new(77).is_snow());
    }

    #[test]
    fn drizzle_is_not_rain() {
        assert!(!WeatherCode::new(53).is_rain());
    }

    #[test]
    fn description_falls_back_to_unknown() {
        assert_eq!(WeatherCode::new(0).description(), "Clear sky");
        assert_eq!(WeatherCode::new(42).description(), "Unknown");
    }

    #[test]
    fn icon_matches_category() {
        assert_eq!(WeatherCode::new(95).icon(), "⛈️");
        assert_eq!(WeatherCode::new(200).icon(), "🌡️");
    }
}
