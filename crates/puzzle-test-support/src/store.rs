//! Test stores — mock `ImageStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use puzzle_core::error::DomainError;
use puzzle_core::image::CompositeImage;
use puzzle_core::repository::{ImageStore, StoredSession};
use uuid::Uuid;

/// An image store that records every saved session and serves them back.
#[derive(Debug, Default)]
pub struct RecordingImageStore {
    saved: Mutex<Vec<StoredSession>>,
}

impl RecordingImageStore {
    /// Create an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `sessions`, oldest first.
    #[must_use]
    pub fn with_sessions(sessions: Vec<StoredSession>) -> Self {
        Self {
            saved: Mutex::new(sessions),
        }
    }

    /// Returns a snapshot of all saved sessions.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_sessions(&self) -> Vec<StoredSession> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn save_session(&self, session: StoredSession) -> Result<(), DomainError> {
        self.saved.lock().unwrap().push(session);
        Ok(())
    }

    async fn load_session(&self, session_id: Uuid) -> Result<Option<StoredSession>, DomainError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_id == session_id)
            .cloned())
    }

    async fn latest_composite(&self) -> Result<Option<CompositeImage>, DomainError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|s| s.composite.clone()))
    }
}

/// An image store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingImageStore;

#[async_trait]
impl ImageStore for FailingImageStore {
    async fn save_session(&self, _session: StoredSession) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn load_session(&self, _session_id: Uuid) -> Result<Option<StoredSession>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn latest_composite(&self) -> Result<Option<CompositeImage>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
