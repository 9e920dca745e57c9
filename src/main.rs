use std::sync::Arc;

use game_catalog::{
    config::Config,
    routes::{create_router, AppState},
    services::providers::IgdbProvider,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("game_catalog=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider = IgdbProvider::new(
        config.igdb_client_id.clone(),
        config.igdb_access_token.clone(),
        config.igdb_api_url.clone(),
    );
    let state = Arc::new(AppState::new(Arc::new(provider), config.igdb_endpoint.clone()));

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
