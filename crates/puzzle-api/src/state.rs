//! Shared application state.

use std::sync::Arc;

use puzzle_core::clock::Clock;
use puzzle_core::repository::ImageStore;
use puzzle_gallery::domain::upload::UploadLimits;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for upload timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Where uploaded sessions live.
    pub image_store: Arc<dyn ImageStore>,
    /// Bounds applied to uploads.
    pub upload_limits: UploadLimits,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        image_store: Arc<dyn ImageStore>,
        upload_limits: UploadLimits,
    ) -> Self {
        Self {
            clock,
            image_store,
            upload_limits,
        }
    }
}
