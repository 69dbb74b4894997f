use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use venue_admin_service::{
    adapters::{membership::webhook::WebhookMembership, store::memory::MemoryStore},
    api::{self, AppState},
    config::Config,
    seed,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("venue_admin_service=info,tower_http=info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let store = Arc::new(MemoryStore::default());
    seed::seed_demo_data(store.as_ref()).await?;

    let membership = Arc::new(WebhookMembership::new(
        config.webhook_url.clone(),
        config.lookup_timeout,
    )?);

    let app = api::router(AppState { store, membership });

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
