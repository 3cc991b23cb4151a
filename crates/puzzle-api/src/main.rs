//! Puzzle piece browser API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use puzzle_core::clock::SystemClock;
use puzzle_image_store::memory_image_store::InMemoryImageStore;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use puzzle_api::config::ServerConfig;
use puzzle_api::error::AppError;
use puzzle_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting puzzle piece browser API server");

    let config = ServerConfig::from_env()?;
    let cors = config.cors_layer()?;

    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(InMemoryImageStore::new()),
        config.upload_limits(),
    );

    let app = puzzle_api::app(app_state, config.max_body_bytes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
