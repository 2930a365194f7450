//! Weather dashboard service
//!
//! Drives the startup flow: resolve the user's location, fall back to the
//! persisted default city, or prompt for one. Every successful fetch is
//! normalized into a display view and broadcast on the event bus.

use std::sync::Arc;

use domain::value_objects::Place;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::ApplicationError;
use crate::ports::{LocationPort, WeatherPort};

use super::city_store::CityStore;
use super::events::{DashboardEvent, EventBus};
use super::normalize::{build_view, round_degrees};
use super::view::{PartialWeather, WeatherView};

/// Display name used when showing weather for resolved coordinates
pub const YOUR_LOCATION: &str = "Your Location";

/// Orchestrates location resolution, weather fetches, and view broadcast
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
    location: Arc<dyn LocationPort>,
    cities: Arc<CityStore>,
    events: EventBus,
    last_view: RwLock<Option<WeatherView>>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("has_view", &self.last_view.read().is_some())
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create the service over its ports, the city store, and the bus
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        location: Arc<dyn LocationPort>,
        cities: Arc<CityStore>,
        events: EventBus,
    ) -> Self {
        Self {
            weather,
            location,
            cities,
            events,
            last_view: RwLock::new(None),
        }
    }

    /// Resolve where to show weather for and fetch it
    ///
    /// Tries the user's current location first; on failure falls back to
    /// the persisted default city. With neither available, no fetch happens
    /// at all: a [`DashboardEvent::DefaultCityNeeded`] prompt is emitted
    /// and `Ok(None)` returned.
    pub async fn refresh(&self) -> Result<Option<WeatherView>, ApplicationError> {
        match self.location.current_location().await {
            Ok(location) => {
                info!("Showing weather for resolved coordinates");
                let place = Place::new(YOUR_LOCATION, location)?;
                Ok(Some(self.show(place).await?))
            },
            Err(e) => {
                warn!(error = %e, "Location resolution failed, trying default city");
                match self.cities.default_city().await? {
                    Some(city) => Ok(Some(self.show(city).await?)),
                    None => {
                        self.events.emit_prompt(DashboardEvent::DefaultCityNeeded);
                        Ok(None)
                    },
                }
            },
        }
    }

    /// Fetch, normalize, and broadcast the weather view for a place
    pub async fn show(&self, place: Place) -> Result<WeatherView, ApplicationError> {
        let report = self.weather.fetch_report(&place.location()).await?;
        let view = build_view(&place, &report, self.cities.is_tracked(place.name()));

        *self.last_view.write() = Some(view.clone());
        self.events.emit_weather(view.clone());
        Ok(view)
    }

    /// Fetch the reduced whole-degree summary for a place
    pub async fn summary(&self, place: &Place) -> Result<PartialWeather, ApplicationError> {
        let reading = self.weather.fetch_summary(&place.location()).await?;
        Ok(PartialWeather {
            current: round_degrees(reading.temperature),
            max_temp: round_degrees(reading.temperature_max),
            min_temp: round_degrees(reading.temperature_min),
        })
    }

    /// The most recently shown view, if any
    #[must_use]
    pub fn last_view(&self) -> Option<WeatherView> {
        self.last_view.read().clone()
    }
}
