//! In-process event bus
//!
//! Multicast, push-only broadcast channels, one per concern: new weather
//! views, city-list updates, and dashboard prompts. Late subscribers see
//! only what is emitted after they subscribe; delivery order matches
//! emission order; nothing survives the process.

use domain::value_objects::Place;
use tokio::sync::broadcast;

use super::view::WeatherView;

/// Buffered events per channel before slow subscribers start lagging
const CHANNEL_CAPACITY: usize = 16;

/// Prompts the presentation layer should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Location resolution failed and no default city is persisted; the UI
    /// should ask the user for one instead of fetching
    DefaultCityNeeded,
}

/// Broadcast bus decoupling services from presentation
///
/// Cloning shares the underlying channels. Emitting with zero subscribers
/// is not an error.
#[derive(Debug, Clone)]
pub struct EventBus {
    weather: broadcast::Sender<WeatherView>,
    cities: broadcast::Sender<Vec<Place>>,
    prompts: broadcast::Sender<DashboardEvent>,
}

impl EventBus {
    /// Create a bus with fresh channels
    #[must_use]
    pub fn new() -> Self {
        let (weather, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (cities, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (prompts, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            weather,
            cities,
            prompts,
        }
    }

    /// Subscribe to newly fetched weather views
    #[must_use]
    pub fn subscribe_weather(&self) -> broadcast::Receiver<WeatherView> {
        self.weather.subscribe()
    }

    /// Subscribe to favorites-list updates
    #[must_use]
    pub fn subscribe_cities(&self) -> broadcast::Receiver<Vec<Place>> {
        self.cities.subscribe()
    }

    /// Subscribe to dashboard prompts
    #[must_use]
    pub fn subscribe_prompts(&self) -> broadcast::Receiver<DashboardEvent> {
        self.prompts.subscribe()
    }

    /// Publish a weather view
    pub fn emit_weather(&self, view: WeatherView) {
        let _ = self.weather.send(view);
    }

    /// Publish the current favorites list
    pub fn emit_cities(&self, cities: Vec<Place>) {
        let _ = self.cities.send(cities);
    }

    /// Publish a dashboard prompt
    pub fn emit_prompt(&self, event: DashboardEvent) {
        let _ = self.prompts.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
