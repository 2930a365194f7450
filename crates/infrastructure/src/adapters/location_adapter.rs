//! Location adapter - Implements LocationPort using integration_geolocation

use application::error::ApplicationError;
use application::ports::LocationPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_geolocation::{GeoIpLocator, LocationError};
use tracing::{debug, instrument};

use crate::config::LocationAppConfig;

/// Adapter resolving the user's approximate location by IP
#[derive(Debug, Clone, Default)]
pub struct LocationAdapter {
    locator: GeoIpLocator,
}

impl LocationAdapter {
    /// Create an adapter from the location configuration
    #[must_use]
    pub fn new(config: &LocationAppConfig) -> Self {
        let locator = config
            .ip
            .as_deref()
            .map_or_else(GeoIpLocator::new, GeoIpLocator::for_ip);
        Self { locator }
    }

    /// Map integration location error to application error
    fn map_error(err: LocationError) -> ApplicationError {
        match err {
            LocationError::Unavailable(e) => ApplicationError::ExternalService(e),
            LocationError::Parse(e) => ApplicationError::Internal(e),
        }
    }
}

#[async_trait]
impl LocationPort for LocationAdapter {
    #[instrument(skip(self))]
    async fn current_location(&self) -> Result<GeoLocation, ApplicationError> {
        let resolved = self.locator.locate().await.map_err(Self::map_error)?;

        debug!(city = %resolved.city, "Resolved approximate location");
        let location = GeoLocation::new(resolved.latitude, resolved.longitude)
            .map_err(domain::DomainError::from)?;
        Ok(location)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.locator.is_available().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_without_explicit_ip() {
        let adapter = LocationAdapter::new(&LocationAppConfig::default());
        let debug = format!("{adapter:?}");
        assert!(debug.contains("LocationAdapter"));
    }

    #[test]
    fn new_with_explicit_ip() {
        let config = LocationAppConfig {
            ip: Some("8.8.8.8".to_string()),
        };
        let adapter = LocationAdapter::new(&config);
        assert!(format!("{adapter:?}").contains("8.8.8.8"));
    }

    #[test]
    fn map_error_unavailable_is_external() {
        let err = LocationAdapter::map_error(LocationError::Unavailable("offline".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_parse_is_internal() {
        let err = LocationAdapter::map_error(LocationError::Parse("abc".into()));
        assert!(matches!(err, ApplicationError::Internal(_)));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LocationAdapter>();
    }
}
