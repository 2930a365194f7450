//! Location resolution port
//!
//! Defines the interface for obtaining the user's current coordinates.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving the user's current location
///
/// Implementations make a single attempt per call; the caller owns the
/// fallback policy when resolution fails.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Resolve the current coordinates
    async fn current_location(&self) -> Result<GeoLocation, ApplicationError>;

    /// Check if the location capability is available at all
    async fn is_available(&self) -> bool;
}
