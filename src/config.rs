//! Configuration management for skycast
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables. Upstream credentials and base URLs live here so the provider
//! clients can be constructed once at process start and injected everywhere.

use crate::SkycastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the skycast service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkycastConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Geocoding provider settings (forward and reverse)
    #[serde(default)]
    pub geocode: GeocodeConfig,
    /// IP geolocation provider settings
    #[serde(default)]
    pub ip_lookup: IpLookupConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Geocoding provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeConfig {
    /// OpenCage API key
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the geocoding API
    #[serde(default = "default_geocode_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// IP geolocation provider settings (no API key required)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLookupConfig {
    /// Base URL for the IP geolocation API
    #[serde(default = "default_ip_lookup_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_geocode_base_url() -> String {
    "https://api.opencagedata.com".to_string()
}

fn default_ip_lookup_base_url() -> String {
    "https://ipapi.co".to_string()
}

fn default_timeout() -> u32 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_weather_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_geocode_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for IpLookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_ip_lookup_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl SkycastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("skycast.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. SKYCAST_WEATHER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("SKYCAST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SkycastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("weather", &self.weather.base_url),
            ("geocode", &self.geocode.base_url),
            ("ip_lookup", &self.ip_lookup.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SkycastError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        for (name, timeout) in [
            ("weather", self.weather.timeout_seconds),
            ("geocode", self.geocode.timeout_seconds),
            ("ip_lookup", self.ip_lookup.timeout_seconds),
        ] {
            if timeout == 0 || timeout > 300 {
                return Err(SkycastError::config(format!(
                    "{name} timeout must be between 1 and 300 seconds"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SkycastConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org");
        assert_eq!(config.geocode.base_url, "https://api.opencagedata.com");
        assert_eq!(config.ip_lookup.base_url, "https://ipapi.co");
        assert_eq!(config.weather.timeout_seconds, 10);
        assert!(config.weather.api_key.is_empty());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SkycastConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_bad_url() {
        let mut config = SkycastConfig::default();
        config.geocode.base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("geocode base URL")
        );
    }

    #[test]
    fn test_config_validation_rejects_zero_timeout() {
        let mut config = SkycastConfig::default();
        config.weather.timeout_seconds = 0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = SkycastConfig::load_from_path(Some(PathBuf::from(
            "nonexistent-skycast-config.toml",
        )))
        .unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
