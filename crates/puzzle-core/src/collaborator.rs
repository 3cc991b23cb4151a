//! The image collaborator contract consumed by the session navigator.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::image::{CompositeImage, PieceImage};

/// Source of the images a session view browses.
///
/// Implementations own storage and encoding; callers only rely on ordering.
#[async_trait]
pub trait ImageCollaborator: Send + Sync {
    /// Returns the piece images of a session in upload order.
    ///
    /// The order is stable across calls for the same session and the
    /// sequence may be empty.
    async fn fetch_session_images(&self, session_id: Uuid)
    -> Result<Vec<PieceImage>, DomainError>;

    /// Returns the most recently uploaded composite image, if any.
    ///
    /// This is not scoped to a session.
    async fn fetch_latest_composite(&self) -> Result<Option<CompositeImage>, DomainError>;
}
