//! Image value types exchanged between the gallery and the navigator.
//!
//! Image data is opaque: an encoded image (typically a data URL) that only
//! the presentation layer knows how to display.

use serde::{Deserialize, Serialize};

/// One uploaded image representing a piece of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceImage {
    /// Opaque encoded image, passed through untouched.
    pub data: String,
    /// Human-readable label.
    pub label: String,
}

impl PieceImage {
    /// Creates a piece image.
    #[must_use]
    pub fn new(data: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            label: label.into(),
        }
    }
}

/// The reference image showing the assembled puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeImage {
    /// Opaque encoded image, passed through untouched.
    pub data: String,
    /// Human-readable label.
    pub label: String,
}

impl CompositeImage {
    /// Creates a composite image.
    #[must_use]
    pub fn new(data: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            label: label.into(),
        }
    }
}
