//! Bible Server - verse lookup, search and reader annotations

use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bible_server::{
    api,
    config::{AppConfig, DatabaseConfig, StoreBackend},
    repository::{memory::MemoryStore, postgres::PostgresStore, DocumentStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bible_server={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Bible Server v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config.database).await?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(config, store);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the configured document store.
///
/// The Postgres pool connects lazily: an unreachable database does not stop
/// startup, it surfaces on `/test` and as store errors on user data routes.
async fn open_store(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory document store; user data is not persisted");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
                .connect_lazy(&config.url)?;

            let store = PostgresStore::new(pool);
            match store.migrate().await {
                Ok(()) => tracing::info!("Database migrations completed"),
                Err(e) => tracing::error!("Database migrations failed: {}", e),
            }
            Ok(Arc::new(store))
        }
    }
}
