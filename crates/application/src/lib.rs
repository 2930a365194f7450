//! Application layer - Use cases and orchestration
//!
//! Contains the weather-dashboard orchestration services, the port
//! definitions implemented by infrastructure adapters, and the in-process
//! event bus that decouples services from presentation.

pub mod error;
pub mod ports;
pub mod services;
#[cfg(test)]
#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
