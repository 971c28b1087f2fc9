use anyhow::Result;
use tracing_subscriber::EnvFilter;

use skycast::config::SkycastConfig;
use skycast::resolver::Resolver;
use skycast::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SkycastConfig::load()?;
    let resolver = Resolver::new(&config)?;

    web::run(config.server.port, resolver).await
}
