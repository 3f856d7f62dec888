use anyhow::Context;
use tracing_subscriber::EnvFilter;

use moodflix_api::{
    api::{create_router, AppState},
    catalog::CatalogStore,
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moodflix_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // The catalog is loaded once and never mutated afterwards
    let catalog = CatalogStore::load(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path.display()))?;

    let state = AppState::new(catalog, config.recommendation_settings());
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
