//! Test collaborators — mock `ImageCollaborator` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use puzzle_core::collaborator::ImageCollaborator;
use puzzle_core::error::DomainError;
use puzzle_core::image::{CompositeImage, PieceImage};
use uuid::Uuid;

/// A collaborator that returns the same images for every session and records
/// which sessions were requested.
#[derive(Debug)]
pub struct StaticImageCollaborator {
    images: Vec<PieceImage>,
    composite: Option<CompositeImage>,
    requested: Mutex<Vec<Uuid>>,
}

impl StaticImageCollaborator {
    /// Create a collaborator serving `images` and `composite`.
    #[must_use]
    pub fn new(images: Vec<PieceImage>, composite: Option<CompositeImage>) -> Self {
        Self {
            images,
            composite,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Returns the session ids passed to `fetch_session_images`, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested_sessions(&self) -> Vec<Uuid> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageCollaborator for StaticImageCollaborator {
    async fn fetch_session_images(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<PieceImage>, DomainError> {
        self.requested.lock().unwrap().push(session_id);
        Ok(self.images.clone())
    }

    async fn fetch_latest_composite(&self) -> Result<Option<CompositeImage>, DomainError> {
        Ok(self.composite.clone())
    }
}

/// A collaborator that always returns an infrastructure error. Useful for
/// testing the failed-fetch view.
#[derive(Debug)]
pub struct FailingImageCollaborator;

#[async_trait]
impl ImageCollaborator for FailingImageCollaborator {
    async fn fetch_session_images(
        &self,
        _session_id: Uuid,
    ) -> Result<Vec<PieceImage>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn fetch_latest_composite(&self) -> Result<Option<CompositeImage>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
