//! Telemetry setup
//!
//! Structured logging to stderr via tracing-subscriber. The `NIMBUS_LOG`
//! environment variable overrides the configured filter.

use application::error::ApplicationError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "NIMBUS_LOG";

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_telemetry(default_filter: &str) -> Result<(), ApplicationError> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| ApplicationError::Internal(format!("Failed to install subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_succeeds_once() {
        // First call installs, the second must report the conflict
        assert!(init_telemetry("info").is_ok());
        assert!(init_telemetry("info").is_err());
    }
}
