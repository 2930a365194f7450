//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Detailed weather payload for a location: current conditions plus
/// hourly and daily forecast arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Observation time (Unix seconds, UTC)
    pub observed_at: i64,
    /// IANA timezone name of the queried point
    pub timezone: String,
    /// Offset from UTC in seconds
    pub timezone_offset: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent/feels-like temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Wind speed
    pub wind_speed: f64,
    /// Condition description (e.g. "overcast clouds")
    pub condition: String,
    /// Condition icon code (e.g. "04d")
    pub icon: String,
    /// Hourly forecast entries
    pub hourly: Vec<HourlyOutlook>,
    /// Daily forecast entries
    pub daily: Vec<DailyOutlook>,
}

/// One hour of forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyOutlook {
    /// Forecast time (Unix seconds, UTC)
    pub at: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Condition description
    pub condition: String,
    /// Condition icon code
    pub icon: String,
}

/// One day of forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOutlook {
    /// Forecast date (Unix seconds, UTC)
    pub at: i64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Condition description
    pub condition: String,
    /// Condition icon code
    pub icon: String,
    /// Precipitation probability (0.0-1.0) when the API supplied one
    pub precipitation_probability: Option<f64>,
}

/// Reduced reading used for favorite-city list rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummaryReading {
    /// Current temperature in Celsius
    pub temperature: f64,
    /// Maximum temperature in the area
    pub temperature_max: f64,
    /// Minimum temperature in the area
    pub temperature_min: f64,
}

/// Port for weather data retrieval
///
/// Both fetches are independent, fire-once HTTP calls in the adapter; the
/// port neither retries nor caches.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the detailed weather payload for a location
    async fn fetch_report(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError>;

    /// Fetch the reduced summary reading for a location
    async fn fetch_summary(
        &self,
        location: &GeoLocation,
    ) -> Result<SummaryReading, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}
