//! Routes for composite reference images.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use tracing::instrument;

use puzzle_gallery::application::query_handlers;

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// GET /latest
#[instrument(skip(state))]
async fn latest_composite(State(state): State<AppState>) -> Result<Response, ApiError> {
    let composite = query_handlers::get_latest_composite(&*state.image_store).await?;

    Ok(match composite {
        Some(composite) => Json(composite).into_response(),
        None => ErrorBody {
            error: "composite_not_found",
            message: "no composite image has been uploaded".to_owned(),
        }
        .into_response_with(StatusCode::NOT_FOUND),
    })
}

/// Returns the router for composite images.
pub fn router() -> Router<AppState> {
    Router::new().route("/latest", get(latest_composite))
}
