//! Named geographic place value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

/// A named geographic point - the unit of "a city the user cares about"
///
/// List membership and de-duplication compare `name` only, not coordinates;
/// two places sharing a name are the same city as far as the favorites list
/// is concerned, even when their coordinates differ. Persisted JSON shape is
/// `{"name": ..., "lat": ..., "lon": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    name: String,
    #[serde(flatten)]
    location: GeoLocation,
}

impl Place {
    /// Create a place with a validated, non-empty name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPlaceName` when the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>, location: GeoLocation) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidPlaceName(name));
        }
        Ok(Self { name, location })
    }

    /// Get the display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the coordinates
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Whether two places refer to the same city (name comparison only)
    #[must_use]
    pub fn same_city(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}
