//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Place name is empty or otherwise unusable
    #[error("Invalid place name: {0}")]
    InvalidPlaceName(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl From<crate::value_objects::InvalidCoordinates> for DomainError {
    fn from(_: crate::value_objects::InvalidCoordinates) -> Self {
        Self::InvalidCoordinates
    }
}
