//! Puzzle piece browser — HTTP API.
//!
//! Exposes the gallery's upload and retrieval operations so a browser-based
//! presentation layer can act as the image collaborator's client.

use axum::Router;
use axum::extract::DefaultBodyLimit;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the application router with its request body cap. Tracing and
/// CORS layers are added by the binary.
pub fn app(state: state::AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/sessions", routes::sessions::router())
        .nest("/api/v1/composites", routes::composites::router())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
