//! Error types and handling for skycast

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the skycast service.
///
/// Every resolver returns this uniformly; the dispatcher maps any failure to
/// HTTP 500 with the error's display text as the body.
#[derive(Error, Debug)]
pub enum SkycastError {
    /// An upstream API call failed (transport, status, or decode)
    #[error("{provider} request failed: {message}")]
    Upstream {
        provider: &'static str,
        message: String,
    },

    /// Forward or reverse geocoding returned no results
    #[error("No geocoding results for '{query}'")]
    NoResults { query: String },

    /// Default mode invoked without both coordinates.
    /// The display text is part of the wire contract.
    #[error("Error: Missing Latitude (and/or) Longitude attributes")]
    MissingCoordinates,

    /// A query parameter could not be interpreted
    #[error("Invalid {name} value '{value}'")]
    InvalidQuery { name: &'static str, value: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SkycastError {
    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::Upstream {
            provider,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl IntoResponse for SkycastError {
    fn into_response(self) -> Response {
        tracing::warn!("Request failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
