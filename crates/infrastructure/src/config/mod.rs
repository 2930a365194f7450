//! Application configuration
//!
//! Loaded from an optional `nimbus.toml` file with `NIMBUS_*` environment
//! variable overrides (double underscore separates nesting, e.g.
//! `NIMBUS_WEATHER__API_KEY`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Weather API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// One-call endpoint URL (current conditions plus forecasts)
    #[serde(default = "default_onecall_url")]
    pub onecall_url: String,

    /// Current-weather endpoint URL (reduced summary)
    #[serde(default = "default_current_url")]
    pub current_url: String,

    /// API key, required for any fetch to succeed
    #[serde(default)]
    pub api_key: String,

    /// Measurement units ("metric" or "imperial")
    #[serde(default = "default_units")]
    pub units: String,

    /// Connection timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl WeatherAppConfig {
    /// Convert to the integration client's configuration
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            onecall_url: self.onecall_url.clone(),
            current_url: self.current_url.clone(),
            api_key: self.api_key.clone(),
            units: self.units.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
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

const fn default_weather_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            onecall_url: default_onecall_url(),
            current_url: default_current_url(),
            api_key: String::new(),
            units: default_units(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

/// Geolocation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationAppConfig {
    /// Explicit IP address to geolocate instead of the caller's own
    ///
    /// Mostly useful for testing from behind NAT or VPN setups.
    #[serde(default)]
    pub ip: Option<String>,
}

/// Local state storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the redb database file
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("nimbus.redb")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Default log filter when `NIMBUS_LOG` is not set (e.g. "info",
    /// "nimbus=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather API settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Geolocation settings
    #[serde(default)]
    pub location: LocationAppConfig,

    /// Local state storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("nimbus").required(false))
            // Override with environment variables (e.g., NIMBUS_WEATHER__API_KEY)
            .add_source(
                config::Environment::with_prefix("NIMBUS")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
