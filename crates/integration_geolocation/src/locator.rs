//! IP-based location lookup

use ipgeolocate::{Locator, Service};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Location lookup errors
#[derive(Debug, Error)]
pub enum LocationError {
    /// The geolocation service could not be reached or rejected the request
    #[error("Geolocation service unavailable: {0}")]
    Unavailable(String),

    /// The service responded with coordinates that could not be parsed
    #[error("Unparseable coordinates in geolocation response: {0}")]
    Parse(String),
}

/// A resolved approximate location
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// Latitude in decimal degrees (WGS84)
    pub latitude: f64,
    /// Longitude in decimal degrees (WGS84)
    pub longitude: f64,
    /// City reported by the service
    pub city: String,
    /// Region reported by the service
    pub region: String,
}

/// IP geolocation client backed by ip-api.com
///
/// Passing an empty query string makes the service geolocate the caller's
/// own public IP address.
#[derive(Debug, Clone, Default)]
pub struct GeoIpLocator {
    /// Optional explicit IP to geolocate instead of the caller's own
    ip: Option<String>,
}

impl GeoIpLocator {
    /// Locator for the caller's own public IP
    #[must_use]
    pub const fn new() -> Self {
        Self { ip: None }
    }

    /// Locator for an explicit IP address (useful for testing and tooling)
    #[must_use]
    pub fn for_ip(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
        }
    }

    /// Resolve the approximate location, single attempt
    ///
    /// # Errors
    ///
    /// Returns `LocationError::Unavailable` on network or service failure and
    /// `LocationError::Parse` when the service returns coordinate strings
    /// that are not valid decimal degrees.
    #[instrument(skip(self))]
    pub async fn locate(&self) -> Result<ResolvedLocation, LocationError> {
        let query = self.ip.as_deref().unwrap_or("");
        debug!(service = "IpApi", "Resolving location");

        let response = Locator::get(query, Service::IpApi)
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        let resolved = parse_coordinates(&response.latitude, &response.longitude).map(
            |(latitude, longitude)| ResolvedLocation {
                latitude,
                longitude,
                city: response.city,
                region: response.region,
            },
        )?;

        debug!(
            lat = resolved.latitude,
            lon = resolved.longitude,
            city = %resolved.city,
            "Location resolved"
        );
        Ok(resolved)
    }

    /// Check whether the geolocation service answers at all
    pub async fn is_available(&self) -> bool {
        match self.locate().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Geolocation service unavailable");
                false
            },
        }
    }
}

/// Parse the service's coordinate strings into decimal degrees
fn parse_coordinates(latitude: &str, longitude: &str) -> Result<(f64, f64), LocationError> {
    match (latitude.parse::<f64>(), longitude.parse::<f64>()) {
        (Ok(lat), Ok(lon)) => Ok((lat, lon)),
        _ => Err(LocationError::Parse(format!("{latitude}, {longitude}"))),
    }
}
