//! Query handlers for the Gallery context.
//!
//! This module contains query handlers that load stored sessions and return
//! read-only view DTOs.

use puzzle_core::error::DomainError;
use puzzle_core::image::{CompositeImage, PieceImage};
use puzzle_core::repository::ImageStore;
use serde::Serialize;
use uuid::Uuid;

/// Read-only view of a session's piece images.
#[derive(Debug, Serialize)]
pub struct SessionImagesView {
    /// The session identifier.
    pub session_id: Uuid,
    /// Piece images in upload order.
    pub images: Vec<PieceImage>,
}

/// Retrieves the piece images of a session.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session was never stored.
pub async fn get_session_images(
    session_id: Uuid,
    store: &dyn ImageStore,
) -> Result<SessionImagesView, DomainError> {
    let session = store
        .load_session(session_id)
        .await?
        .ok_or(DomainError::SessionNotFound(session_id))?;
    Ok(SessionImagesView {
        session_id,
        images: session.images,
    })
}

/// Retrieves the most recently uploaded composite image.
///
/// # Errors
///
/// Returns the store's error if loading fails.
pub async fn get_latest_composite(
    store: &dyn ImageStore,
) -> Result<Option<CompositeImage>, DomainError> {
    store.latest_composite().await
}
