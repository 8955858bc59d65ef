//! Games catalog binary entrypoint wiring the REST layer to the storage backend.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use games_catalog_back::{
    config::AppConfig,
    dao::game_store::GameStore,
    routes,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    let store = connect_store(&config).await?;
    let app_state = AppState::new(store);

    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Open the SQLite-backed store configured through the environment.
#[cfg(feature = "sqlite-store")]
async fn connect_store(
    config: &AppConfig,
) -> anyhow::Result<Arc<dyn GameStore>> {
    use games_catalog_back::dao::game_store::sqlite::{SqliteConfig, SqliteGameStore};

    let sqlite = SqliteConfig::from_url(&config.database_url).context("parsing DATABASE_URL")?;
    let store = SqliteGameStore::connect(sqlite)
        .await
        .context("opening SQLite database")?;

    info!(url = %config.database_url, "connected to SQLite");
    Ok(Arc::new(store))
}

/// Without the SQLite feature the catalog lives in process memory only.
#[cfg(not(feature = "sqlite-store"))]
async fn connect_store(
    _config: &AppConfig,
) -> anyhow::Result<Arc<dyn GameStore>> {
    use games_catalog_back::dao::game_store::memory::MemoryGameStore;

    tracing::warn!("sqlite-store feature disabled; records are not persisted across restarts");
    Ok(Arc::new(MemoryGameStore::new()))
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
