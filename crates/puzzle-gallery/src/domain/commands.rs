//! Commands for the Gallery context.

use serde::Deserialize;
use uuid::Uuid;

/// One image as submitted by the uploader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageUpload {
    /// Opaque encoded image.
    pub data: String,
    /// Optional label; pieces without one are numbered.
    #[serde(default)]
    pub label: Option<String>,
}

impl ImageUpload {
    /// An unlabeled upload.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            label: None,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Command to upload a batch of piece images as a new session.
#[derive(Debug, Clone)]
pub struct UploadPieceImages {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Piece images in display order.
    pub images: Vec<ImageUpload>,
    /// Optional composite reference image.
    pub composite: Option<ImageUpload>,
}
