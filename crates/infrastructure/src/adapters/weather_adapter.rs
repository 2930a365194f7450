//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{DailyOutlook, HourlyOutlook, SummaryReading, WeatherPort, WeatherReport};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_weather::{
    ConditionTag, OneCallResponse, OpenWeatherClient, WeatherClient, WeatherCondition,
    WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap-style API
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter over the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Domain(domain::DomainError::InvalidCoordinates)
            },
            WeatherError::MissingApiKey => {
                ApplicationError::Configuration("Weather API key is not set".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Description and icon from the first weather tag, with fallbacks
    fn describe(tags: &[ConditionTag]) -> (String, String) {
        tags.first().map_or_else(
            || (WeatherCondition::Unknown.description().to_string(), String::new()),
            |tag| (tag.description.clone(), tag.icon.clone()),
        )
    }

    /// Flatten the one-call payload into the port's report shape
    fn map_report(payload: &OneCallResponse) -> WeatherReport {
        let (condition, icon) = Self::describe(&payload.current.weather);

        let hourly = payload
            .hourly
            .iter()
            .map(|h| {
                let (condition, icon) = Self::describe(&h.weather);
                HourlyOutlook {
                    at: h.dt,
                    temperature: h.temp,
                    condition,
                    icon,
                }
            })
            .collect();

        let daily = payload
            .daily
            .iter()
            .map(|d| {
                let (condition, icon) = Self::describe(&d.weather);
                DailyOutlook {
                    at: d.dt,
                    temperature_min: d.temp.min,
                    temperature_max: d.temp.max,
                    condition,
                    icon,
                    precipitation_probability: d.pop,
                }
            })
            .collect();

        WeatherReport {
            observed_at: payload.current.dt,
            timezone: payload.timezone.clone(),
            timezone_offset: payload.timezone_offset,
            temperature: payload.current.temp,
            feels_like: payload.current.feels_like,
            humidity: payload.current.humidity,
            wind_speed: payload.current.wind_speed,
            condition,
            icon,
            hourly,
            daily,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_report(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError> {
        let payload = self
            .client
            .one_call(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(
            temperature = payload.current.temp,
            hourly = payload.hourly.len(),
            daily = payload.daily.len(),
            "Retrieved weather report"
        );
        Ok(Self::map_report(&payload))
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_summary(
        &self,
        location: &GeoLocation,
    ) -> Result<SummaryReading, ApplicationError> {
        let payload = self
            .client
            .current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        Ok(SummaryReading {
            temperature: payload.main.temp,
            temperature_max: payload.main.temp_max,
            temperature_min: payload.main.temp_min,
        })
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WeatherConfig {
        WeatherConfig {
            api_key: "test-key".to_string(),
            ..WeatherConfig::default()
        }
    }

    fn sample_payload() -> OneCallResponse {
        serde_json::from_value(serde_json::json!({
            "lat": 52.52,
            "lon": 13.405,
            "timezone": "Europe/Berlin",
            "timezone_offset": 3600,
            "current": {
                "dt": 1_700_000_000,
                "temp": 5.5,
                "feels_like": 2.0,
                "humidity": 75,
                "wind_speed": 4.2,
                "weather": [{"id": 804, "main": "Clouds", "description": "overcast clouds", "icon": "04d"}]
            },
            "hourly": [{
                "dt": 1_700_003_600,
                "temp": 5.1,
                "pop": 0.2,
                "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}]
            }],
            "daily": [{
                "dt": 1_700_000_000,
                "temp": {"min": 2.4, "max": 7.6, "day": 5.0},
                "pop": 0.1,
                "weather": [{"id": 804, "main": "Clouds", "description": "overcast clouds", "icon": "04d"}]
            }]
        }))
        .expect("valid payload")
    }

    #[test]
    fn new_creates_adapter() {
        let adapter = WeatherAdapter::new(test_config());
        assert!(adapter.is_ok());
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let result = WeatherAdapter::new(WeatherConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn map_report_flattens_payload() {
        let report = WeatherAdapter::map_report(&sample_payload());

        assert_eq!(report.observed_at, 1_700_000_000);
        assert_eq!(report.timezone, "Europe/Berlin");
        assert_eq!(report.condition, "overcast clouds");
        assert_eq!(report.icon, "04d");
        assert_eq!(report.hourly.len(), 1);
        assert_eq!(report.hourly[0].condition, "light rain");
        assert_eq!(report.daily.len(), 1);
        assert!((report.daily[0].temperature_max - 7.6).abs() < f64::EPSILON);
        assert_eq!(report.daily[0].precipitation_probability, Some(0.1));
    }

    #[test]
    fn missing_weather_tags_fall_back_to_unknown() {
        let mut payload = sample_payload();
        payload.current.weather.clear();

        let report = WeatherAdapter::map_report(&payload);
        assert_eq!(report.condition, "Unknown");
        assert!(report.icon.is_empty());
    }

    #[test]
    fn map_error_external_failures() {
        let err = WeatherAdapter::map_error(WeatherError::ConnectionFailed("timeout".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));

        let err = WeatherAdapter::map_error(WeatherError::ServiceUnavailable("503".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_rate_limited() {
        let err = WeatherAdapter::map_error(WeatherError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_invalid_coords() {
        let err = WeatherAdapter::map_error(WeatherError::InvalidCoordinates);
        assert!(matches!(
            err,
            ApplicationError::Domain(domain::DomainError::InvalidCoordinates)
        ));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
