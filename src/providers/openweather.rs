//! Client for the OpenWeatherMap current-weather endpoint

use std::time::Duration;

use reqwest::Client;

use crate::Result;
use crate::config::WeatherConfig;
use crate::error::SkycastError;
use crate::models::{Coordinates, WeatherReading};

const PROVIDER: &str = "openweathermap";

/// Fetches current weather by coordinates, imperial units fixed.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client from configuration
    pub fn new(config: &WeatherConfig) -> Result<Self> {
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

    /// Fetch the current weather for a coordinate pair.
    ///
    /// The provider JSON is returned verbatim. Coordinates are passed through
    /// unvalidated; out-of-range values are the upstream's problem.
    pub async fn fetch_weather(&self, coords: Coordinates) -> Result<WeatherReading> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        tracing::debug!(
            "Fetching weather for ({}, {})",
            coords.latitude,
            coords.longitude
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
            ])
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

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> WeatherClient {
        WeatherClient::new(&WeatherConfig {
            api_key: "test-key".to_string(),
            base_url: server.url(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_weather_returns_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/data/2.5/weather")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("lat".into(), "-37.81".into()),
                mockito::Matcher::UrlEncoded("lon".into(), "144.9644".into()),
                mockito::Matcher::UrlEncoded("appid".into(), "test-key".into()),
                mockito::Matcher::UrlEncoded("units".into(), "imperial".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(r#"{"main":{"temp":55.2},"name":"Melbourne"}"#)
            .create_async()
            .await;

        let reading = client_for(&server)
            .fetch_weather(Coordinates {
                latitude: -37.81,
                longitude: 144.9644,
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reading["main"]["temp"], 55.2);
        assert_eq!(reading["name"], "Melbourne");
    }

    #[tokio::test]
    async fn test_fetch_weather_maps_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/data/2.5/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_weather(Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SkycastError::Upstream { .. }));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_fetch_weather_maps_bad_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/data/2.5/weather")
            .match_query(mockito::Matcher::Any)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_weather(Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("invalid JSON"));
    }
}
