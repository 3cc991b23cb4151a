//! Render-ready view of a session, produced by
//! [`SessionView::snapshot`](super::session_view::SessionView::snapshot).

use std::fmt;

use puzzle_core::image::{CompositeImage, PieceImage};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::cursor::Cursor;

/// Which mode the session view is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    /// The image fetch is outstanding.
    Loading,
    /// The session has no images.
    Empty,
    /// Images are loaded and navigable.
    Browsing,
    /// The image fetch failed.
    Failed,
    /// The view has been closed.
    Closed,
}

/// One-based "current of total" counter, displayed as `3 / 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// One-based current item.
    pub current: usize,
    /// Number of items.
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

/// Everything a presentation layer needs to draw the session screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    /// The session being viewed.
    pub session_id: Uuid,
    /// Current mode.
    pub status: ViewStatus,
    /// Cursor while browsing.
    pub cursor: Option<Cursor>,
    /// Image counter while browsing.
    pub image_position: Option<Position>,
    /// Box counter while browsing.
    pub box_position: Option<Position>,
    /// The piece image under the cursor.
    pub piece: Option<PieceImage>,
    /// The composite reference image, once loaded.
    pub composite: Option<CompositeImage>,
    /// Whether the "previous" control is enabled.
    pub can_previous: bool,
    /// Whether the "next" control is enabled.
    pub can_next: bool,
    /// Failure message when the fetch failed.
    pub error: Option<String>,
}

impl ViewSnapshot {
    pub(crate) fn inert(session_id: Uuid, status: ViewStatus) -> Self {
        Self {
            session_id,
            status,
            cursor: None,
            image_position: None,
            box_position: None,
            piece: None,
            composite: None,
            can_previous: false,
            can_next: false,
            error: None,
        }
    }
}
