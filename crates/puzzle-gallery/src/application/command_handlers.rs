//! Command handlers for the Gallery context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: validate the command, assemble the session,
//! persist it.

use puzzle_core::clock::Clock;
use puzzle_core::error::DomainError;
use puzzle_core::repository::ImageStore;
use tracing::info;
use uuid::Uuid;

use crate::domain::commands::UploadPieceImages;
use crate::domain::upload::{UploadLimits, assemble_session};

/// Result of a successfully handled upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// The session created for the upload.
    pub session_id: Uuid,
    /// Number of piece images stored.
    pub image_count: usize,
    /// Whether a composite was stored with the pieces.
    pub has_composite: bool,
}

/// Handles the `UploadPieceImages` command: validates the batch, creates a
/// new session and stores it.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the batch is rejected, or the store's
/// error if saving fails.
pub async fn handle_upload_piece_images(
    command: &UploadPieceImages,
    limits: UploadLimits,
    clock: &dyn Clock,
    store: &dyn ImageStore,
) -> Result<UploadResult, DomainError> {
    let session_id = Uuid::new_v4();
    let session = assemble_session(command, limits, session_id, clock.now())?;
    let result = UploadResult {
        session_id,
        image_count: session.images.len(),
        has_composite: session.composite.is_some(),
    };

    store.save_session(session).await?;

    info!(
        correlation_id = %command.correlation_id,
        %session_id,
        image_count = result.image_count,
        "stored uploaded session"
    );

    Ok(result)
}
