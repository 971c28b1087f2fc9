//! Client for the ipapi.co IP-geolocation API

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::Result;
use crate::config::IpLookupConfig;
use crate::error::SkycastError;

const PROVIDER: &str = "ipapi";

/// Geolocation of a client IP
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpLocation {
    pub city: String,
    pub region_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl IpLocation {
    /// Fixed fallback used whenever the lookup fails
    pub fn fallback() -> Self {
        Self {
            city: "Melbourne".to_string(),
            region_code: "VIC".to_string(),
            latitude: -37.81,
            longitude: 144.9644,
        }
    }
}

/// Resolves a client IP to an approximate location.
///
/// Lookup failures of any kind (non-success status, transport error, decode
/// error) are absorbed into the fallback location so region mode degrades to
/// a fixed default instead of failing the request.
#[derive(Debug, Clone)]
pub struct IpLocator {
    http: Client,
    base_url: String,
}

impl IpLocator {
    /// Create a new IP locator from configuration
    pub fn new(config: &IpLookupConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(super::USER_AGENT)
            .build()
            .map_err(|e| SkycastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Locate a client IP, substituting the fallback location on any failure
    pub async fn locate(&self, client_ip: &str) -> IpLocation {
        match self.lookup(client_ip).await {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!("IP geolocation failed for {client_ip}, using fallback: {e}");
                IpLocation::fallback()
            }
        }
    }

    async fn lookup(&self, client_ip: &str) -> Result<IpLocation> {
        let url = format!("{}/{}/json/", self.base_url, client_ip);
        tracing::debug!("Looking up IP location: {url}");

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

        response
            .json()
            .await
            .map_err(|e| SkycastError::upstream(PROVIDER, format!("invalid JSON: {e}")))
    }
}
