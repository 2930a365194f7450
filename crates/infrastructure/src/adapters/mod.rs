//! Port adapters
//!
//! Bridge the integration clients to the application-layer ports.

mod location_adapter;
mod weather_adapter;

pub use location_adapter::LocationAdapter;
pub use weather_adapter::WeatherAdapter;
