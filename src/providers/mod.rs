//! HTTP clients for the three upstream providers.
//!
//! Each client owns its own `reqwest::Client` configured from the relevant
//! config section (base URL, timeout, credentials) so tests can point them at
//! a stub server.

pub mod ipapi;
pub mod opencage;
pub mod openweather;

pub use ipapi::{IpLocation, IpLocator};
pub use opencage::GeocodeClient;
pub use openweather::WeatherClient;

pub(crate) const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));
