//! Session view: the state machine a presentation layer drives for one
//! session.
//!
//! A view starts out `Loading` with a one-shot [`LoadTicket`]. The first
//! completion carrying that ticket moves it to `Empty`, `Browsing` or
//! `Failed`; anything arriving later, or after [`SessionView::close`], is
//! dropped. Navigation intents only have an effect while `Browsing`.

use std::sync::atomic::{AtomicU64, Ordering};

use puzzle_core::collaborator::ImageCollaborator;
use puzzle_core::error::DomainError;
use puzzle_core::image::{CompositeImage, PieceImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::snapshot::{Position, ViewSnapshot, ViewStatus};
use crate::domain::cursor::Cursor;
use crate::domain::navigator::{Navigation, Navigator, NavigatorConfig};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one outstanding image fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    fn issue() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

/// A discrete user action on the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationIntent {
    /// "Previous" button or its keyboard activation.
    Previous,
    /// "Next" button or its keyboard activation.
    Next,
}

/// Result of a successful fetch from the image collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImages {
    /// Piece images in session order.
    pub images: Vec<PieceImage>,
    /// The latest composite, if one was ever uploaded.
    pub composite: Option<CompositeImage>,
}

/// Loaded session data plus the cursor over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browsing {
    navigator: Navigator,
    cursor: Cursor,
    images: Vec<PieceImage>,
    composite: Option<CompositeImage>,
}

impl Browsing {
    /// The navigator sized to this session.
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The cursor.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// All piece images of the session.
    #[must_use]
    pub fn images(&self) -> &[PieceImage] {
        &self.images
    }

    /// The piece image under the cursor.
    #[must_use]
    pub fn current_piece(&self) -> Option<&PieceImage> {
        self.images.get(self.cursor.image_index)
    }
}

/// Mode of a session view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionViewState {
    /// Waiting for the fetch identified by the ticket.
    Loading(LoadTicket),
    /// The session has no piece images.
    Empty {
        /// The latest composite, shown even without pieces.
        composite: Option<CompositeImage>,
    },
    /// Images are loaded and the cursor is live.
    Browsing(Browsing),
    /// The fetch failed; holds the failure message.
    Failed(String),
    /// The view was closed; nothing is retained.
    Closed,
}

/// Presentation-facing controller for one session.
#[derive(Debug)]
pub struct SessionView {
    session_id: Uuid,
    config: NavigatorConfig,
    state: SessionViewState,
}

impl SessionView {
    /// Opens a view for `session_id` in the `Loading` state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` if the navigator
    /// configuration is unusable.
    pub fn new(session_id: Uuid, config: NavigatorConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            session_id,
            config,
            state: SessionViewState::Loading(LoadTicket::issue()),
        })
    }

    /// The session being viewed.
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Current mode.
    #[must_use]
    pub const fn state(&self) -> &SessionViewState {
        &self.state
    }

    /// The ticket of the outstanding fetch, if the view is still loading.
    #[must_use]
    pub const fn pending_load(&self) -> Option<LoadTicket> {
        match self.state {
            SessionViewState::Loading(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// The cursor while browsing.
    #[must_use]
    pub const fn cursor(&self) -> Option<Cursor> {
        match &self.state {
            SessionViewState::Browsing(browsing) => Some(browsing.cursor),
            _ => None,
        }
    }

    /// Delivers the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves the view untouched when the ticket does not
    /// match the outstanding fetch (already completed, closed, or issued by a
    /// different view).
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<LoadedImages, DomainError>,
    ) -> bool {
        if self.pending_load() != Some(ticket) {
            debug!(session_id = %self.session_id, ?ticket, "discarding stale image load");
            return false;
        }

        self.state = match outcome {
            Ok(loaded) => self.initialize(loaded),
            Err(err) => {
                warn!(session_id = %self.session_id, error = %err, "image fetch failed");
                SessionViewState::Failed(err.to_string())
            }
        };
        true
    }

    fn initialize(&self, loaded: LoadedImages) -> SessionViewState {
        let LoadedImages { images, composite } = loaded;
        match Navigator::initialize(images.len(), self.config.boxes_per_image) {
            Ok((navigator, Navigation::Browsing(cursor))) => {
                info!(
                    session_id = %self.session_id,
                    image_count = navigator.image_count(),
                    boxes_per_image = navigator.boxes_per_image(),
                    "session ready for browsing"
                );
                SessionViewState::Browsing(Browsing {
                    navigator,
                    cursor,
                    images,
                    composite,
                })
            }
            Ok((_, Navigation::Empty)) => {
                info!(session_id = %self.session_id, "session has no images");
                SessionViewState::Empty { composite }
            }
            Err(err) => SessionViewState::Failed(err.to_string()),
        }
    }

    /// Fetches the session images and latest composite, then completes the
    /// outstanding load.
    ///
    /// Returns `false` if the view was not loading. Dropping the returned
    /// future abandons the fetch.
    pub async fn load(&mut self, collaborator: &dyn ImageCollaborator) -> bool {
        let Some(ticket) = self.pending_load() else {
            return false;
        };
        let outcome = fetch(self.session_id, collaborator).await;
        self.complete_load(ticket, outcome)
    }

    /// Applies a navigation intent, returning the new cursor while browsing.
    pub fn handle(&mut self, intent: NavigationIntent) -> Option<Cursor> {
        let SessionViewState::Browsing(browsing) = &mut self.state else {
            debug!(session_id = %self.session_id, ?intent, "ignoring intent outside browsing");
            return None;
        };

        let from = browsing.cursor;
        browsing.cursor = match intent {
            NavigationIntent::Next => browsing.navigator.advance(from),
            NavigationIntent::Previous => browsing.navigator.retreat(from),
        };
        debug!(
            session_id = %self.session_id,
            ?intent,
            ?from,
            to = ?browsing.cursor,
            "navigated"
        );
        Some(browsing.cursor)
    }

    /// Shorthand for [`NavigationIntent::Next`].
    pub fn advance(&mut self) -> Option<Cursor> {
        self.handle(NavigationIntent::Next)
    }

    /// Shorthand for [`NavigationIntent::Previous`].
    pub fn retreat(&mut self) -> Option<Cursor> {
        self.handle(NavigationIntent::Previous)
    }

    /// Closes the view. Pending loads are discarded when they arrive.
    pub fn close(&mut self) {
        if self.state != SessionViewState::Closed {
            info!(session_id = %self.session_id, "session view closed");
        }
        self.state = SessionViewState::Closed;
    }

    /// What the presentation layer should currently show.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        match &self.state {
            SessionViewState::Loading(_) => ViewSnapshot::inert(self.session_id, ViewStatus::Loading),
            SessionViewState::Empty { composite } => ViewSnapshot {
                composite: composite.clone(),
                ..ViewSnapshot::inert(self.session_id, ViewStatus::Empty)
            },
            SessionViewState::Browsing(browsing) => {
                let navigator = &browsing.navigator;
                let cursor = browsing.cursor;
                ViewSnapshot {
                    session_id: self.session_id,
                    status: ViewStatus::Browsing,
                    cursor: Some(cursor),
                    image_position: Some(Position {
                        current: cursor.image_index + 1,
                        total: navigator.image_count(),
                    }),
                    box_position: Some(Position {
                        current: cursor.box_index + 1,
                        total: navigator.boxes_per_image(),
                    }),
                    piece: browsing.current_piece().cloned(),
                    composite: browsing.composite.clone(),
                    can_previous: !navigator.is_at_start(cursor),
                    can_next: !navigator.is_at_end(cursor),
                    error: None,
                }
            }
            SessionViewState::Failed(message) => ViewSnapshot {
                error: Some(message.clone()),
                ..ViewSnapshot::inert(self.session_id, ViewStatus::Failed)
            },
            SessionViewState::Closed => ViewSnapshot::inert(self.session_id, ViewStatus::Closed),
        }
    }
}

async fn fetch(
    session_id: Uuid,
    collaborator: &dyn ImageCollaborator,
) -> Result<LoadedImages, DomainError> {
    let (images, composite) = futures::try_join!(
        collaborator.fetch_session_images(session_id),
        collaborator.fetch_latest_composite(),
    )?;
    Ok(LoadedImages { images, composite })
}
