//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the redb state store, the weather and geolocation adapters,
//! configuration loading, and telemetry setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::{LocationAdapter, WeatherAdapter};
pub use config::{
    AppConfig, LocationAppConfig, StorageConfig, TelemetryAppConfig, WeatherAppConfig,
};
pub use persistence::RedbStateStore;
pub use telemetry::init_telemetry;
