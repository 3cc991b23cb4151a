//! Image store abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::image::{CompositeImage, PieceImage};

/// Stored representation of one upload.
#[derive(Debug, Clone)]
pub struct StoredSession {
    /// Session identifier handed back to the uploader.
    pub session_id: Uuid,
    /// Piece images in upload order.
    pub images: Vec<PieceImage>,
    /// Composite uploaded alongside the pieces, if any.
    pub composite: Option<CompositeImage>,
    /// Correlation ID of the upload command.
    pub correlation_id: Uuid,
    /// When the upload was accepted.
    pub uploaded_at: DateTime<Utc>,
}

/// Repository trait for saving and loading uploaded sessions.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist a new session.
    async fn save_session(&self, session: StoredSession) -> Result<(), DomainError>;

    /// Load a session by id, or `None` when it was never stored.
    async fn load_session(&self, session_id: Uuid) -> Result<Option<StoredSession>, DomainError>;

    /// The composite of the most recently saved session that has one.
    async fn latest_composite(&self) -> Result<Option<CompositeImage>, DomainError>;
}
