//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod location_port;
mod state_store;
mod weather_port;

#[cfg(test)]
pub use location_port::MockLocationPort;
pub use location_port::LocationPort;
pub use state_store::{StateStore, StateStoreExt};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{DailyOutlook, HourlyOutlook, SummaryReading, WeatherPort, WeatherReport};
