//! Response payloads combining weather and location data

use serde::Serialize;
use serde_json::Value;

use super::location::LocationRecord;

/// Raw weather provider payload. The upstream JSON is passed through
/// verbatim; no internal structure is imposed or validated.
pub type WeatherReading = Value;

/// Response body for the search and explicit-coordinate modes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherPayload {
    pub weather_data: WeatherReading,
    pub location_data: LocationRecord,
}

/// Response body for region mode, which only knows a display label
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPayload {
    pub weather_data: WeatherReading,
    pub location_data: RegionLocation,
}

/// Location portion of a region-mode response
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionLocation {
    pub format_string: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = RegionPayload {
            weather_data: json!({"main": {"temp": 55.2}}),
            location_data: RegionLocation {
                format_string: "Melbourne, VIC".to_string(),
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["weatherData"]["main"]["temp"], 55.2);
        assert_eq!(value["locationData"]["formatString"], "Melbourne, VIC");
    }
}
