//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod place;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use place::Place;
