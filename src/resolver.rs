//! Mode resolvers: each orchestrates the upstream calls for one dispatch mode.
//!
//! All upstream calls are awaited sequentially; there is no fan-out and no
//! state shared between requests beyond the clients themselves.

use crate::Result;
use crate::config::SkycastConfig;
use crate::error::SkycastError;
use crate::models::{Coordinates, LocationRecord, RegionLocation, RegionPayload, WeatherPayload};
use crate::providers::{GeocodeClient, IpLocator, WeatherClient};

/// Shared handle to the upstream clients, constructed once at startup
#[derive(Debug, Clone)]
pub struct Resolver {
    weather: WeatherClient,
    geocode: GeocodeClient,
    ip: IpLocator,
}

impl Resolver {
    /// Build all provider clients from configuration
    pub fn new(config: &SkycastConfig) -> Result<Self> {
        Ok(Self {
            weather: WeatherClient::new(&config.weather)?,
            geocode: GeocodeClient::new(&config.geocode)?,
            ip: IpLocator::new(&config.ip_lookup)?,
        })
    }

    /// Region mode: geolocate the client IP (falling back to the fixed
    /// default location), then fetch weather for the resolved coordinates.
    pub async fn get_region(&self, client_ip: &str) -> Result<RegionPayload> {
        let location = self.ip.locate(client_ip).await;

        // No suburb/state substitution here: region mode only knows the
        // city and region code the IP provider reported.
        let format_string = format!("{}, {}", location.city, location.region_code);

        let weather_data = self
            .weather
            .fetch_weather(Coordinates {
                latitude: location.latitude,
                longitude: location.longitude,
            })
            .await?;

        Ok(RegionPayload {
            weather_data,
            location_data: RegionLocation { format_string },
        })
    }

    /// Reverse geocode coordinates into a normalized location record
    pub async fn get_geocode(&self, coords: Coordinates) -> Result<LocationRecord> {
        let results = self.geocode.reverse_geocode(coords).await?;

        let result = results.first().ok_or_else(|| SkycastError::NoResults {
            query: format!("{},{}", coords.latitude, coords.longitude),
        })?;

        Ok(LocationRecord::from(result))
    }

    /// Search mode: forward geocode the query, then fetch weather for the
    /// matched coordinates. Zero results fail the request.
    pub async fn get_search_data(&self, query: &str) -> Result<WeatherPayload> {
        let results = self.geocode.geocode(query).await?;

        let result = results
            .into_iter()
            .next()
            .ok_or_else(|| SkycastError::NoResults {
                query: query.to_string(),
            })?;

        let geometry = result
            .geometry
            .ok_or_else(|| SkycastError::upstream("opencage", "result missing geometry"))?;

        let weather_data = self.weather.fetch_weather(geometry.into()).await?;
        let location_data = LocationRecord::from(&result);

        Ok(WeatherPayload {
            weather_data,
            location_data,
        })
    }

    /// Explicit-coordinate mode: weather first, then reverse geocoding
    pub async fn get_coordinate_data(&self, coords: Coordinates) -> Result<WeatherPayload> {
        let weather_data = self.weather.fetch_weather(coords).await?;
        let location_data = self.get_geocode(coords).await?;

        Ok(WeatherPayload {
            weather_data,
            location_data,
        })
    }
}
