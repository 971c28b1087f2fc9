//! Request-scoped data models: nothing here outlives a single request cycle.

pub mod location;
pub mod weather;

pub use location::{Coordinates, GeocodeComponents, GeocodeResult, Geometry, LocationRecord};
pub use weather::{RegionLocation, RegionPayload, WeatherPayload, WeatherReading};
