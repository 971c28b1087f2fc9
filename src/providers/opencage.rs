//! Client for the OpenCage geocoding API (forward and reverse)

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::Result;
use crate::config::GeocodeConfig;
use crate::error::SkycastError;
use crate::models::{Coordinates, GeocodeResult};

const PROVIDER: &str = "opencage";

/// Forward and reverse geocoding against a single endpoint; both directions
/// request exactly one result with annotations disabled.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

impl GeocodeClient {
    /// Create a new geocoding client from configuration
    pub fn new(config: &GeocodeConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(super::USER_AGENT)
            .build()
            .map_err(|e| SkycastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Forward geocode a free-text location query
    pub async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>> {
        tracing::debug!("Geocoding query: '{query}'");
        self.request(query).await
    }

    /// Reverse geocode a coordinate pair
    pub async fn reverse_geocode(&self, coords: Coordinates) -> Result<Vec<GeocodeResult>> {
        let q = format!("{},{}", coords.latitude, coords.longitude);
        tracing::debug!("Reverse geocoding ({q})");
        self.request(&q).await
    }

    async fn request(&self, q: &str) -> Result<Vec<GeocodeResult>> {
        let url = format!(
            "{}/geocode/v1/json?q={}&key={}&no_annotations=1&limit=1",
            self.base_url,
            urlencoding::encode(q),
            self.api_key
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SkycastError::upstream(PROVIDER, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkycastError::upstream(PROVIDER, format!("status {status}")));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| SkycastError::upstream(PROVIDER, format!("invalid JSON: {e}")))?;

        Ok(body.results)
    }
}
