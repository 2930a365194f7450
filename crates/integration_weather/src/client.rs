//! OpenWeather client
//!
//! HTTP client for an OpenWeatherMap-style weather API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentConditions, OneCallResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// No API key configured
    #[error("Missing API key: set weather.api_key or the NIMBUS_WEATHER__API_KEY variable")]
    MissingApiKey,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Detailed-weather endpoint (default: the OpenWeatherMap one-call URL)
    #[serde(default = "default_onecall_url")]
    pub onecall_url: String,

    /// Summary-weather endpoint (default: the OpenWeatherMap current URL)
    #[serde(default = "default_current_url")]
    pub current_url: String,

    /// API key passed as the `APPID` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Measurement units requested from the API (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_onecall_url() -> String {
    "https://api.openweathermap.org/data/2.5/onecall".to_string()
}

fn default_current_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            onecall_url: default_onecall_url(),
            current_url: default_current_url(),
            api_key: String::new(),
            units: default_units(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the detailed one-call payload for a coordinate pair
    async fn one_call(&self, latitude: f64, longitude: f64)
    -> Result<OneCallResponse, WeatherError>;

    /// Get the reduced current-conditions summary for a coordinate pair
    async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeather HTTP client implementation
///
/// Each call is fire-once: no retry, no backoff, no caching. Failures are
/// surfaced to the caller as `WeatherError` values.
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Query parameters shared by both endpoints
    fn query_params(&self, latitude: f64, longitude: f64) -> [(&'static str, String); 5] {
        [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("APPID", self.config.api_key.clone()),
            ("units", self.config.units.clone()),
            ("exclude", "minutely".to_string()),
        ]
    }

    /// Issue a GET and deserialize the JSON body, mapping error statuses
    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .query(&self.query_params(latitude, longitude))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn one_call(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<OneCallResponse, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        debug!(url = %self.config.onecall_url, "Fetching detailed weather");
        self.fetch(&self.config.onecall_url, latitude, longitude)
            .await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        debug!(url = %self.config.current_url, "Fetching summary weather");
        self.fetch(&self.config.current_url, latitude, longitude)
            .await
    }

    async fn is_healthy(&self) -> bool {
        // Probe with Berlin coordinates
        self.current(52.52, 13.41).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WeatherConfig {
        WeatherConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(
            config.onecall_url,
            "https://api.openweathermap.org/data/2.5/onecall"
        );
        assert_eq!(
            config.current_url,
            "https://api.openweathermap.org/data/2.5/weather"
        );
        assert_eq!(config.units, "metric");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let err = OpenWeatherClient::new(WeatherConfig::default());
        assert!(matches!(err, Err(WeatherError::MissingApiKey)));

        let blank = WeatherConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            OpenWeatherClient::new(blank),
            Err(WeatherError::MissingApiKey)
        ));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenWeatherClient::new(test_config()).is_ok());
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(OpenWeatherClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenWeatherClient::validate_coordinates(90.0, 180.0).is_ok());
        assert!(OpenWeatherClient::validate_coordinates(-90.0, -180.0).is_ok());
        assert!(OpenWeatherClient::validate_coordinates(52.52, 13.41).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(OpenWeatherClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenWeatherClient::validate_coordinates(-91.0, 0.0).is_err());
        assert!(OpenWeatherClient::validate_coordinates(0.0, 181.0).is_err());
        assert!(OpenWeatherClient::validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn test_query_params_shape() {
        let client = OpenWeatherClient::new(test_config()).expect("client creation");
        let params = client.query_params(52.52, 13.405);

        assert_eq!(params[0], ("lat", "52.52".to_string()));
        assert_eq!(params[1], ("lon", "13.405".to_string()));
        assert_eq!(params[2], ("APPID", "test-key".to_string()));
        assert_eq!(params[3], ("units", "metric".to_string()));
        assert_eq!(params[4], ("exclude", "minutely".to_string()));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));

        let err = WeatherError::MissingApiKey;
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_config_serialization() {
        let config = WeatherConfig {
            onecall_url: "https://custom.api.com/onecall".to_string(),
            current_url: "https://custom.api.com/weather".to_string(),
            api_key: "k".to_string(),
            units: "metric".to_string(),
            timeout_secs: 60,
        };

        let json = serde_json::to_string(&config).expect("serialize");
        let deserialized: WeatherConfig = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(deserialized.onecall_url, "https://custom.api.com/onecall");
        assert_eq!(deserialized.timeout_secs, 60);
    }
}
