//! Presentation-ready view models
//!
//! The shapes the dashboard renders: whole-degree temperatures, formatted
//! timestamps, and an `added` flag marking favorites-list membership.

use serde::{Deserialize, Serialize};

/// A point in time formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTimestamp {
    /// Clock time, e.g. "14:05"
    pub time: String,
    /// Full weekday name, e.g. "Monday"
    pub day: String,
    /// Calendar date, e.g. "17 Nov 2025"
    pub date: String,
}

/// One hour of forecast, display-ready
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyView {
    /// Clock time of the forecast hour
    pub time: String,
    /// Temperature rounded to whole degrees
    pub temperature: i32,
    /// Condition icon code
    pub icon: String,
}

/// One day of forecast, display-ready
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyView {
    /// Weekday name of the forecast day
    pub day: String,
    /// Minimum temperature rounded to whole degrees
    pub temperature_min: i32,
    /// Maximum temperature rounded to whole degrees
    pub temperature_max: i32,
    /// Condition description
    pub condition: String,
    /// Condition icon code
    pub icon: String,
}

/// The full weather payload for a place, shaped for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherView {
    /// Display name of the place this view describes
    pub display_name: String,
    /// IANA timezone of the place
    pub timezone: String,
    /// Observation time, formatted in the place's local time
    pub observed: FormattedTimestamp,
    /// Temperature rounded to whole degrees
    pub temperature: i32,
    /// Feels-like temperature rounded to whole degrees
    pub feels_like: i32,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed
    pub wind_speed: f64,
    /// Condition description
    pub condition: String,
    /// Condition icon code
    pub icon: String,
    /// Whether the place is already in the favorites list
    pub added: bool,
    /// Display-ready hourly forecast
    pub hourly: Vec<HourlyView>,
    /// Display-ready daily forecast
    pub daily: Vec<DailyView>,
}

/// Reduced summary for favorite-city list rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialWeather {
    /// Current temperature, whole degrees
    pub current: i32,
    /// Maximum temperature, whole degrees
    pub max_temp: i32,
    /// Minimum temperature, whole degrees
    pub min_temp: i32,
}
