use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::resolver::Resolver;

/// Build the application router. Split out from [`run`] so tests can drive
/// the full stack in process.
pub fn app(resolver: Resolver) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", api::router(resolver)).layer(cors)
}

pub async fn run(port: u16, resolver: Resolver) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("skycast listening at http://localhost:{}", port);

    axum::serve(
        listener,
        app(resolver).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
