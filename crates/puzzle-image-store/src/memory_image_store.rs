//! In-memory implementation of the `ImageStore` trait.
//!
//! Sessions live for the lifetime of the process. Insertion order decides
//! which composite is the "latest".

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use puzzle_core::error::DomainError;
use puzzle_core::image::CompositeImage;
use puzzle_core::repository::{ImageStore, StoredSession};

/// Process-local image store.
#[derive(Debug, Default)]
pub struct InMemoryImageStore {
    sessions: RwLock<Vec<StoredSession>>,
}

impl InMemoryImageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::Infrastructure("image store lock poisoned".to_owned())
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn save_session(&self, session: StoredSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        if sessions.iter().any(|s| s.session_id == session.session_id) {
            return Err(DomainError::Infrastructure(format!(
                "session {} already stored",
                session.session_id
            )));
        }
        debug!(
            session_id = %session.session_id,
            image_count = session.images.len(),
            has_composite = session.composite.is_some(),
            "storing session"
        );
        sessions.push(session);
        Ok(())
    }

    async fn load_session(&self, session_id: Uuid) -> Result<Option<StoredSession>, DomainError> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.iter().find(|s| s.session_id == session_id).cloned())
    }

    async fn latest_composite(&self) -> Result<Option<CompositeImage>, DomainError> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.iter().rev().find_map(|s| s.composite.clone()))
    }
}
