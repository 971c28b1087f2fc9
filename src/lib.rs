//! skycast - weather and location aggregation service
//!
//! Serves a single HTTP endpoint with three lookup modes (free-text search,
//! IP-detected region, explicit coordinates) backed by three upstream APIs:
//! weather by coordinates, IP geolocation, and forward/reverse geocoding.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod resolver;
pub mod web;

// Re-export core types for public API
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use models::{LocationRecord, WeatherReading};
pub use resolver::Resolver;

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;
