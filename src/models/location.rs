//! Location models: upstream geocoding shapes and the derived location record

use serde::{Deserialize, Serialize};

/// Geographic coordinates, constructed per request from query parameters or
/// an upstream geocoding result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// One result from the OpenCage geocoding API
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    /// Comma-separated display address
    pub formatted: String,
    /// Address components; all fields are optional upstream
    #[serde(default)]
    pub components: GeocodeComponents,
    /// Matched coordinates (present on forward geocoding results)
    pub geometry: Option<Geometry>,
}

/// Address components of a geocoding result
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeComponents {
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    #[serde(default)]
    pub country_code: String,
}

/// Coordinates of a geocoding match
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Geometry {
    pub lat: f64,
    pub lng: f64,
}

impl From<Geometry> for Coordinates {
    fn from(geometry: Geometry) -> Self {
        Self {
            latitude: geometry.lat,
            longitude: geometry.lng,
        }
    }
}

/// Normalized location record derived from a geocoding result
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    /// Always uppercased, regardless of source casing
    pub country_code: String,
    /// First comma-segment of the formatted address
    pub full_address: String,
    /// Human-readable "suburb-or-address, state-or-country" label
    pub format_string: String,
}

impl From<&GeocodeResult> for LocationRecord {
    fn from(result: &GeocodeResult) -> Self {
        let components = &result.components;

        let full_address = result
            .formatted
            .split(',')
            .next()
            .unwrap_or_default()
            .to_string();

        let country_code = components.country_code.to_uppercase();

        let place = components
            .suburb
            .clone()
            .unwrap_or_else(|| full_address.clone());
        let region = components
            .state_code
            .clone()
            .unwrap_or_else(|| country_code.clone());

        Self {
            suburb: components.suburb.clone(),
            city: components.city.clone(),
            state_code: components.state_code.clone(),
            country_code,
            full_address,
            format_string: format!("{place}, {region}"),
        }
    }
}
