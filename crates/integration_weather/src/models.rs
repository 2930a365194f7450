//! Weather data models
//!
//! Types for the consumed subset of the OpenWeatherMap API payloads.

use serde::{Deserialize, Serialize};

/// Weather condition derived from OpenWeatherMap condition IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (800)
    Clear,
    /// Few or scattered clouds (801, 802)
    PartlyCloudy,
    /// Broken or overcast clouds (803, 804)
    Cloudy,
    /// Mist, haze, fog (7xx)
    Fog,
    /// Drizzle (3xx)
    Drizzle,
    /// Rain (5xx)
    Rain,
    /// Snow and sleet (6xx)
    Snow,
    /// Thunderstorm (2xx)
    Thunderstorm,
    /// Unknown condition
    Unknown,
}

impl WeatherCondition {
    /// Convert an OpenWeatherMap condition ID to a `WeatherCondition`
    ///
    /// See: <https://openweathermap.org/weather-conditions>
    #[must_use]
    pub const fn from_condition_id(id: u16) -> Self {
        match id {
            200..=299 => Self::Thunderstorm,
            300..=399 => Self::Drizzle,
            500..=599 => Self::Rain,
            600..=699 => Self::Snow,
            700..=799 => Self::Fog,
            800 => Self::Clear,
            801 | 802 => Self::PartlyCloudy,
            803 | 804 => Self::Cloudy,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description of the weather condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Get an emoji representation of the weather condition
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁️",
            Self::Fog => "🌫️",
            Self::Drizzle | Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// One weather tag from the API's `weather` array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionTag {
    /// Condition ID (e.g. 800 for clear sky)
    pub id: u16,
    /// Condition group (e.g. "Clear", "Rain")
    pub main: String,
    /// Free-text description (e.g. "light rain")
    pub description: String,
    /// Icon code (e.g. "10d")
    pub icon: String,
}

impl ConditionTag {
    /// Categorized condition for this tag
    #[must_use]
    pub const fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_condition_id(self.id)
    }
}

/// Observed conditions block from the one-call payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservedConditions {
    /// Observation time (Unix seconds, UTC)
    pub dt: i64,
    /// Sunrise time (Unix seconds, UTC)
    #[serde(default)]
    pub sunrise: Option<i64>,
    /// Sunset time (Unix seconds, UTC)
    #[serde(default)]
    pub sunset: Option<i64>,
    /// Temperature in the requested units
    pub temp: f64,
    /// Apparent (feels like) temperature
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed
    pub wind_speed: f64,
    /// Weather tags (usually a single entry)
    #[serde(default)]
    pub weather: Vec<ConditionTag>,
}

impl ObservedConditions {
    /// Primary weather tag, when the API supplied one
    #[must_use]
    pub fn primary_tag(&self) -> Option<&ConditionTag> {
        self.weather.first()
    }
}

/// Hourly forecast entry from the one-call payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// Forecast time (Unix seconds, UTC)
    pub dt: i64,
    /// Temperature in the requested units
    pub temp: f64,
    /// Precipitation probability (0.0-1.0)
    #[serde(default)]
    pub pop: Option<f64>,
    /// Weather tags
    #[serde(default)]
    pub weather: Vec<ConditionTag>,
}

/// Day temperature block of a daily forecast entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTemperature {
    /// Minimum temperature
    pub min: f64,
    /// Maximum temperature
    pub max: f64,
    /// Daytime temperature
    pub day: f64,
}

/// Daily forecast entry from the one-call payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Forecast date (Unix seconds, UTC)
    pub dt: i64,
    /// Temperature block
    pub temp: DailyTemperature,
    /// Precipitation probability (0.0-1.0)
    #[serde(default)]
    pub pop: Option<f64>,
    /// Weather tags
    #[serde(default)]
    pub weather: Vec<ConditionTag>,
}

/// Detailed one-call payload: current conditions plus forecast arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneCallResponse {
    /// Latitude of the queried point
    pub lat: f64,
    /// Longitude of the queried point
    pub lon: f64,
    /// IANA timezone name of the queried point
    pub timezone: String,
    /// Offset from UTC in seconds
    pub timezone_offset: i64,
    /// Current conditions
    pub current: ObservedConditions,
    /// Hourly forecast (48 entries when present)
    #[serde(default)]
    pub hourly: Vec<HourlyEntry>,
    /// Daily forecast (8 entries when present)
    #[serde(default)]
    pub daily: Vec<DailyEntry>,
}

/// Main readings block of the current-weather summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    /// Current temperature
    pub temp: f64,
    /// Maximum temperature in the area
    pub temp_max: f64,
    /// Minimum temperature in the area
    pub temp_min: f64,
}

/// Reduced summary payload used for favorite-city list rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature readings
    pub main: MainReadings,
}
