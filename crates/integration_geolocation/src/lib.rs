//! IP geolocation integration
//!
//! Resolves the machine's approximate coordinates via the ip-api.com service.
//! Single-shot: one attempt per request, no retry.

mod locator;

pub use locator::{GeoIpLocator, LocationError, ResolvedLocation};
