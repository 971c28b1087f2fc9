//! HTTP surface: the single weather endpoint and its mode dispatch

use std::net::SocketAddr;

use axum::{
    Router,
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;

use crate::error::SkycastError;
use crate::models::Coordinates;
use crate::resolver::Resolver;

/// Query parameters of the weather endpoint. Modes are mutually exclusive
/// with priority search > region > lat/long.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub search: Option<String>,
    pub region: Option<String>,
    pub lat: Option<String>,
    pub long: Option<String>,
}

pub fn router(resolver: Resolver) -> Router {
    Router::new()
        .route("/weather", get(dispatch))
        .with_state(resolver)
}

/// Selects one of the three lookup modes from the query parameters and maps
/// any resolver failure to HTTP 500 via [`SkycastError`].
async fn dispatch(
    State(resolver): State<Resolver>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(params): Query<WeatherQuery>,
) -> Result<Response, SkycastError> {
    let client_ip = client_ip(&headers, addr);

    if let Some(search) = non_empty(&params.search) {
        tracing::debug!("Dispatching search mode: '{search}'");
        let payload = resolver.get_search_data(search).await?;
        return Ok(Json(payload).into_response());
    }

    if params.region.as_deref() == Some("true") {
        tracing::debug!("Dispatching region mode for {client_ip}");
        let payload = resolver.get_region(&client_ip).await?;
        return Ok(Json(payload).into_response());
    }

    let (Some(lat), Some(long)) = (non_empty(&params.lat), non_empty(&params.long)) else {
        return Err(SkycastError::MissingCoordinates);
    };
    let coords = Coordinates {
        latitude: parse_coordinate("lat", lat)?,
        longitude: parse_coordinate("long", long)?,
    };

    tracing::debug!(
        "Dispatching coordinate mode: ({}, {})",
        coords.latitude,
        coords.longitude
    );
    let payload = resolver.get_coordinate_data(coords).await?;
    Ok(Json(payload).into_response())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_coordinate(name: &'static str, value: &str) -> Result<f64, SkycastError> {
    value.parse().map_err(|_| SkycastError::InvalidQuery {
        name,
        value: value.to_string(),
    })
}

/// Client IP from the first `x-forwarded-for` hop, falling back to the
/// connection's remote address. Resolved once per request.
fn client_ip(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> SocketAddr {
        "192.0.2.10:40000".parse().unwrap()
    }

    #[test]
    fn test_client_ip_prefers_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7".parse().unwrap());
        assert_eq!(client_ip(&headers, addr()), "203.0.113.7");
    }

    #[test]
    fn test_client_ip_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            "203.0.113.7, 10.0.0.1, 10.0.0.2".parse().unwrap(),
        );
        assert_eq!(client_ip(&headers, addr()), "203.0.113.7");
    }

    #[test]
    fn test_client_ip_falls_back_to_socket_address() {
        assert_eq!(client_ip(&HeaderMap::new(), addr()), "192.0.2.10");
    }

    #[test]
    fn test_parse_coordinate_rejects_garbage() {
        assert!(parse_coordinate("lat", "-37.81").is_ok());
        let err = parse_coordinate("lat", "not-a-number").unwrap_err();
        assert!(matches!(err, SkycastError::InvalidQuery { name: "lat", .. }));
    }

    #[test]
    fn test_empty_parameter_counts_as_missing() {
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some("1.5".to_string())), Some("1.5"));
    }
}
