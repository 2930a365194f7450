//! OpenWeather integration
//!
//! Client for an OpenWeatherMap-style weather API. Fetches the detailed
//! one-call payload (current conditions plus hourly and daily forecasts) and
//! the reduced current-conditions summary used for favorite-city lists.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    ConditionTag, CurrentConditions, DailyEntry, DailyTemperature, HourlyEntry, MainReadings,
    ObservedConditions, OneCallResponse, WeatherCondition,
};
