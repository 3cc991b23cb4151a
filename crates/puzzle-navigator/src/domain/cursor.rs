//! The two-dimensional navigation cursor.

use serde::{Deserialize, Serialize};

/// Which piece image and which box within it is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    /// Zero-based index into the session's piece images.
    pub image_index: usize,
    /// Zero-based index of the box within the current image.
    pub box_index: usize,
}

impl Cursor {
    /// The first box of the first image.
    pub const START: Self = Self::new(0, 0);

    /// Creates a cursor.
    #[must_use]
    pub const fn new(image_index: usize, box_index: usize) -> Self {
        Self {
            image_index,
            box_index,
        }
    }
}
