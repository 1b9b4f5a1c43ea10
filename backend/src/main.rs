//! AgriPay report server binary

use std::{net::SocketAddr, sync::Arc};

use agripay_backend::{create_app, AppState, Config, StoreClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "agripay_server=debug,agripay_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgriPay report server");
    tracing::info!("Environment: {}", config.environment);

    let store = StoreClient::new(&config.store)?;
    if store.ping().await {
        tracing::info!("Store reachable at {}", config.store.url);
    } else {
        tracing::warn!("Store not reachable at {}, serving anyway", config.store.url);
    }

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
