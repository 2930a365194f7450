//! Domain layer for Nimbus
//!
//! Contains core value objects and domain errors for the weather dashboard.
//! This layer has no external dependencies and defines the ubiquitous language.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
