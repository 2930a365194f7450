//! Application services - Use case implementations

mod city_store;
mod events;
mod normalize;
mod view;
mod weather_service;

pub use city_store::{CITIES_KEY, CityStore, DEFAULT_CITY_KEY};
pub use events::{DashboardEvent, EventBus};
pub use normalize::{format_timestamp, round_degrees};
pub use view::{DailyView, FormattedTimestamp, HourlyView, PartialWeather, WeatherView};
pub use weather_service::{WeatherService, YOUR_LOCATION};
