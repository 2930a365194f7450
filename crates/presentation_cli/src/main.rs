//! Nimbus CLI
//!
//! Command-line weather dashboard: shows current conditions for the user's
//! location or a chosen city and manages the favorite-city list.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use application::services::{
    CityStore, DashboardEvent, EventBus, PartialWeather, WeatherService, WeatherView,
};
use clap::{Parser, Subcommand};
use domain::value_objects::{GeoLocation, Place};
use infrastructure::{
    AppConfig, LocationAdapter, RedbStateStore, WeatherAdapter, init_telemetry,
};
use tracing::warn;

/// Nimbus CLI
#[derive(Parser)]
#[command(name = "nimbus-cli")]
#[command(author, version, about = "Nimbus weather dashboard CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show weather for your current location (or the default city)
    Now,

    /// Show weather for a favorite city or explicit coordinates
    Show {
        /// Favorite name, or a display name when coordinates are given
        name: String,

        /// Latitude in decimal degrees
        #[arg(long = "lat", allow_negative_numbers = true, requires = "longitude")]
        latitude: Option<f64>,

        /// Longitude in decimal degrees
        #[arg(long = "lon", allow_negative_numbers = true, requires = "latitude")]
        longitude: Option<f64>,
    },

    /// Add a city to the favorites list
    Add {
        /// City name
        name: String,

        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Remove a city from the favorites list
    Remove {
        /// City name
        name: String,
    },

    /// List favorite cities with current temperature summaries
    List,

    /// Set the city used when location resolution fails
    SetDefault {
        /// City name
        name: String,

        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Render the full weather view for terminal output
fn render_view(view: &WeatherView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "📍 {} ({})\n{} {}, {}\n",
        view.display_name, view.timezone, view.observed.day, view.observed.date, view.observed.time
    ));
    out.push_str(&format!(
        "🌡️  {}°, feels like {}° - {}\n",
        view.temperature, view.feels_like, view.condition
    ));
    out.push_str(&format!(
        "💧 {}% humidity, 💨 {} m/s wind\n",
        view.humidity, view.wind_speed
    ));
    if view.added {
        out.push_str("⭐ In your favorites\n");
    }

    if !view.hourly.is_empty() {
        out.push_str("\nNext hours:\n");
        for hour in view.hourly.iter().take(6) {
            out.push_str(&format!("  {}  {}°\n", hour.time, hour.temperature));
        }
    }

    if !view.daily.is_empty() {
        out.push_str("\nNext days:\n");
        for day in &view.daily {
            out.push_str(&format!(
                "  {:<9}  {}° / {}°  {}\n",
                day.day, day.temperature_min, day.temperature_max, day.condition
            ));
        }
    }
    out
}

/// Pick the place to show: explicit coordinates win, otherwise the name must
/// match a stored favorite
fn resolve_place(
    name: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
    favorites: &[Place],
) -> anyhow::Result<Place> {
    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        return Ok(Place::new(name, GeoLocation::new(lat, lon)?)?);
    }
    favorites
        .iter()
        .find(|c| c.name() == name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{name} is not in your favorites; pass --lat and --lon"))
}

/// Render a one-line favorites summary
fn render_summary(name: &str, summary: &PartialWeather) -> String {
    format!(
        "  {name}: {}° (min {}°, max {}°)",
        summary.current, summary.min_temp, summary.max_temp
    )
}

/// Assembled services for one CLI invocation
struct Dashboard {
    cities: Arc<CityStore>,
    events: EventBus,
}

impl Dashboard {
    /// Wire up persistence and the city store
    async fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let state = Arc::new(RedbStateStore::new(&config.storage.path)?);
        let events = EventBus::new();
        let cities = Arc::new(CityStore::new(state, events.clone()));
        cities.load().await?;

        Ok(Self { cities, events })
    }

    /// Wire up the weather service, requires a configured API key
    fn weather(&self, config: &AppConfig) -> anyhow::Result<WeatherService> {
        let weather_port = Arc::new(WeatherAdapter::new(config.weather.to_client_config())?);
        let location_port = Arc::new(LocationAdapter::new(&config.location));
        Ok(WeatherService::new(
            weather_port,
            location_port,
            self.cities.clone(),
            self.events.clone(),
        ))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("⚠️  Invalid configuration, using defaults: {e}");
            AppConfig::default()
        },
    };

    // Command-line verbosity beats the configured filter
    let filter = if cli.verbose > 0 {
        log_filter_from_verbosity(cli.verbose)
    } else {
        &config.telemetry.log_filter
    };
    if let Err(e) = init_telemetry(filter) {
        warn!(error = %e, "Telemetry already initialized");
    }

    match cli.command {
        Commands::Now => {
            let dashboard = Dashboard::build(&config).await?;
            let weather = dashboard.weather(&config)?;
            let mut prompts = dashboard.events.subscribe_prompts();

            match weather.refresh().await? {
                Some(view) => println!("{}", render_view(&view)),
                None => {
                    if let Ok(DashboardEvent::DefaultCityNeeded) = prompts.try_recv() {
                        println!("📍 Could not resolve your location and no default city is set.");
                        println!("   Pick one with: nimbus-cli set-default <name> <lat> <lon>");
                    }
                },
            }
        },

        Commands::Show {
            name,
            latitude,
            longitude,
        } => {
            let dashboard = Dashboard::build(&config).await?;
            let weather = dashboard.weather(&config)?;
            let place = resolve_place(&name, latitude, longitude, &dashboard.cities.cities())?;
            let view = weather.show(place).await?;
            println!("{}", render_view(&view));
        },

        Commands::Add {
            name,
            latitude,
            longitude,
        } => {
            let dashboard = Dashboard::build(&config).await?;
            let place = Place::new(name, GeoLocation::new(latitude, longitude)?)?;
            if dashboard.cities.add(place.clone()).await? {
                println!("⭐ Added {}", place.name());
            } else {
                println!("{} is already in your favorites", place.name());
            }
        },

        Commands::Remove { name } => {
            let dashboard = Dashboard::build(&config).await?;
            let known = dashboard
                .cities
                .cities()
                .into_iter()
                .find(|c| c.name() == name);
            match known {
                Some(place) if dashboard.cities.remove(&place).await? => {
                    println!("🗑️  Removed {name}");
                },
                _ => println!("{name} is not in your favorites"),
            }
        },

        Commands::List => {
            let dashboard = Dashboard::build(&config).await?;
            let cities = dashboard.cities.cities();
            if cities.is_empty() {
                println!("No favorite cities yet. Add one with: nimbus-cli add <name> <lat> <lon>");
            } else {
                let weather = dashboard.weather(&config)?;
                println!("⭐ Favorites:");
                for city in &cities {
                    match weather.summary(city).await {
                        Ok(summary) => println!("{}", render_summary(city.name(), &summary)),
                        Err(e) => println!("  {}: unavailable ({e})", city.name()),
                    }
                }
            }
        },

        Commands::SetDefault {
            name,
            latitude,
            longitude,
        } => {
            let dashboard = Dashboard::build(&config).await?;
            let place = Place::new(name, GeoLocation::new(latitude, longitude)?)?;
            dashboard.cities.set_default_city(&place).await?;
            println!("📌 Default city set to {}", place.name());
        },
    }

    Ok(())
}
