//! In-process `ImageCollaborator` backed by an `ImageStore`.

use std::sync::Arc;

use async_trait::async_trait;
use puzzle_core::collaborator::ImageCollaborator;
use puzzle_core::error::DomainError;
use puzzle_core::image::{CompositeImage, PieceImage};
use puzzle_core::repository::ImageStore;
use uuid::Uuid;

use super::query_handlers;

/// Serves session views straight from the gallery's store.
#[derive(Clone)]
pub struct GalleryCollaborator {
    store: Arc<dyn ImageStore>,
}

impl GalleryCollaborator {
    /// Creates a collaborator over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for GalleryCollaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryCollaborator").finish_non_exhaustive()
    }
}

#[async_trait]
impl ImageCollaborator for GalleryCollaborator {
    async fn fetch_session_images(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<PieceImage>, DomainError> {
        let view = query_handlers::get_session_images(session_id, self.store.as_ref()).await?;
        Ok(view.images)
    }

    async fn fetch_latest_composite(&self) -> Result<Option<CompositeImage>, DomainError> {
        query_handlers::get_latest_composite(self.store.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use puzzle_core::collaborator::ImageCollaborator;
    use puzzle_core::error::DomainError;
    use puzzle_test_support::{FixedClock, RecordingImageStore, fixed_now};
    use uuid::Uuid;

    use super::GalleryCollaborator;
    use crate::application::command_handlers::handle_upload_piece_images;
    use crate::domain::commands::{ImageUpload, UploadPieceImages};
    use crate::domain::upload::UploadLimits;

    #[tokio::test]
    async fn test_fetch_session_images_returns_uploaded_pieces_in_order() {
        // Arrange
        let store = Arc::new(RecordingImageStore::new());
        let command = UploadPieceImages {
            correlation_id: Uuid::new_v4(),
            images: vec![
                ImageUpload::new("data:a").with_label("edge"),
                ImageUpload::new("data:b"),
            ],
            composite: Some(ImageUpload::new("data:full").with_label("Full puzzle")),
        };
        let uploaded = handle_upload_piece_images(
            &command,
            UploadLimits::default(),
            &FixedClock(fixed_now()),
            store.as_ref(),
        )
        .await
        .unwrap();
        let collaborator = GalleryCollaborator::new(store);

        // Act
        let images = collaborator
            .fetch_session_images(uploaded.session_id)
            .await
            .unwrap();
        let composite = collaborator.fetch_latest_composite().await.unwrap();

        // Assert
        let labels: Vec<_> = images.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["edge", "Piece 2"]);
        assert_eq!(composite.unwrap().label, "Full puzzle");
    }

    #[tokio::test]
    async fn test_fetch_session_images_for_unknown_session_fails() {
        let collaborator = GalleryCollaborator::new(Arc::new(RecordingImageStore::new()));

        let result = collaborator.fetch_session_images(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DomainError::SessionNotFound(_))));
    }
}
