//! Routes for upload sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use puzzle_gallery::application::command_handlers;
use puzzle_gallery::application::query_handlers::{self, SessionImagesView};
use puzzle_gallery::domain::commands::{self, ImageUpload};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    /// Piece images in display order.
    pub images: Vec<ImageUpload>,
    /// Optional composite reference image.
    #[serde(default)]
    pub composite: Option<ImageUpload>,
}

/// Response body returned after an upload is stored.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// The new session to browse.
    pub session_id: Uuid,
    /// Number of piece images stored.
    pub image_count: usize,
    /// Whether a composite was stored.
    pub has_composite: bool,
}

/// POST /
#[instrument(skip(state, request), fields(image_count = request.images.len()))]
async fn upload_images(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let command = commands::UploadPieceImages {
        correlation_id: Uuid::new_v4(),
        images: request.images,
        composite: request.composite,
    };

    info!(correlation_id = %command.correlation_id, "handling upload_piece_images command");

    let result = command_handlers::handle_upload_piece_images(
        &command,
        state.upload_limits,
        state.clock.as_ref(),
        &*state.image_store,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            session_id: result.session_id,
            image_count: result.image_count,
            has_composite: result.has_composite,
        }),
    ))
}

/// GET /{session_id}/images
#[instrument(skip(state))]
async fn session_images(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionImagesView>, ApiError> {
    let view = query_handlers::get_session_images(session_id, &*state.image_store).await?;
    Ok(Json(view))
}

/// Returns the router for upload sessions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_images))
        .route("/{session_id}/images", get(session_images))
}
