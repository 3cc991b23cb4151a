//! Upload validation and session assembly.

use chrono::{DateTime, Utc};
use puzzle_core::error::DomainError;
use puzzle_core::image::{CompositeImage, PieceImage};
use puzzle_core::repository::StoredSession;
use uuid::Uuid;

use super::commands::{ImageUpload, UploadPieceImages};

/// Most piece images accepted in one upload.
pub const DEFAULT_MAX_UPLOAD_IMAGES: usize = 20;

/// Label given to a composite uploaded without one.
pub const DEFAULT_COMPOSITE_LABEL: &str = "Composite";

/// Bounds applied to every upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    /// Maximum piece images per upload.
    pub max_images: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_images: DEFAULT_MAX_UPLOAD_IMAGES,
        }
    }
}

fn label_or(upload: &ImageUpload, fallback: impl FnOnce() -> String) -> String {
    upload
        .label
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map_or_else(fallback, str::to_owned)
}

/// Validates an upload command and assembles the session to store.
///
/// Unlabeled pieces are named `Piece 1`, `Piece 2`, ... in upload order.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the batch exceeds `limits.max_images`
/// or any image carries no data.
pub fn assemble_session(
    command: &UploadPieceImages,
    limits: UploadLimits,
    session_id: Uuid,
    uploaded_at: DateTime<Utc>,
) -> Result<StoredSession, DomainError> {
    if command.images.len() > limits.max_images {
        return Err(DomainError::Validation(format!(
            "at most {} images may be uploaded at once, got {}",
            limits.max_images,
            command.images.len()
        )));
    }

    let mut images = Vec::with_capacity(command.images.len());
    for (index, upload) in command.images.iter().enumerate() {
        let number = index + 1;
        if upload.data.trim().is_empty() {
            return Err(DomainError::Validation(format!("image {number} has no data")));
        }
        let label = label_or(upload, || format!("Piece {number}"));
        images.push(PieceImage::new(upload.data.clone(), label));
    }

    let composite = match &command.composite {
        Some(upload) if upload.data.trim().is_empty() => {
            return Err(DomainError::Validation(
                "composite image has no data".to_owned(),
            ));
        }
        Some(upload) => Some(CompositeImage::new(
            upload.data.clone(),
            label_or(upload, || DEFAULT_COMPOSITE_LABEL.to_owned()),
        )),
        None => None,
    };

    Ok(StoredSession {
        session_id,
        images,
        composite,
        correlation_id: command.correlation_id,
        uploaded_at,
    })
}
