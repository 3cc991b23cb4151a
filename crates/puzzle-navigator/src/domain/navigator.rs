//! The session navigator: boundary-clamped cursor transitions.
//!
//! Boxes are traversed in reading order: every box of image 0, then every box
//! of image 1, and so on. Transitions past either end leave the cursor where
//! it is, so the presentation layer may call them repeatedly at an edge.

use puzzle_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::cursor::Cursor;

/// Number of boxes each piece image is divided into unless configured
/// otherwise.
pub const DEFAULT_BOXES_PER_IMAGE: usize = 6;

/// Navigator settings supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Boxes per piece image. Must be positive.
    pub boxes_per_image: usize,
}

impl NavigatorConfig {
    /// Checks that the configuration can initialize a navigator.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` if `boxes_per_image` is zero.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.boxes_per_image == 0 {
            return Err(DomainError::InvalidConfiguration(
                "boxes_per_image must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            boxes_per_image: DEFAULT_BOXES_PER_IMAGE,
        }
    }
}

/// Navigation state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Navigation {
    /// The session has no images. Terminal: nothing to navigate.
    Empty,
    /// The session has images and the cursor marks what is displayed.
    Browsing(Cursor),
}

impl Navigation {
    /// The cursor while browsing.
    #[must_use]
    pub const fn cursor(&self) -> Option<Cursor> {
        match self {
            Self::Empty => None,
            Self::Browsing(cursor) => Some(*cursor),
        }
    }
}

/// Cursor arithmetic over a fixed number of images and boxes per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    image_count: usize,
    boxes_per_image: usize,
}

impl Navigator {
    /// Creates a navigator and its initial navigation state.
    ///
    /// The initial state is `Browsing` at [`Cursor::START`], or `Empty` when
    /// `image_count` is zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` if `boxes_per_image` is zero.
    pub fn initialize(
        image_count: usize,
        boxes_per_image: usize,
    ) -> Result<(Self, Navigation), DomainError> {
        NavigatorConfig { boxes_per_image }.validate()?;
        let navigator = Self {
            image_count,
            boxes_per_image,
        };
        Ok((navigator, navigator.initial()))
    }

    /// Number of piece images in the session.
    #[must_use]
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Boxes per piece image.
    #[must_use]
    pub const fn boxes_per_image(&self) -> usize {
        self.boxes_per_image
    }

    /// Whether the session has no images.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.image_count == 0
    }

    /// Total number of boxes across all images.
    #[must_use]
    pub const fn total_boxes(&self) -> usize {
        self.image_count.saturating_mul(self.boxes_per_image)
    }

    /// The state a freshly opened session starts in.
    #[must_use]
    pub const fn initial(&self) -> Navigation {
        if self.is_empty() {
            Navigation::Empty
        } else {
            Navigation::Browsing(Cursor::START)
        }
    }

    /// Whether `cursor` addresses an existing box.
    #[must_use]
    pub const fn contains(&self, cursor: Cursor) -> bool {
        cursor.image_index < self.image_count && cursor.box_index < self.boxes_per_image
    }

    /// Pulls an out-of-range cursor back onto the nearest existing box.
    #[must_use]
    pub fn clamp(&self, cursor: Cursor) -> Cursor {
        if self.is_empty() {
            return Cursor::START;
        }
        Cursor::new(
            cursor.image_index.min(self.image_count - 1),
            cursor.box_index.min(self.boxes_per_image - 1),
        )
    }

    /// Moves one box forward, crossing into the next image after its last box.
    ///
    /// At the last box of the last image the cursor is returned unchanged.
    #[must_use]
    pub fn advance(&self, cursor: Cursor) -> Cursor {
        if self.is_empty() {
            return cursor;
        }
        let cursor = self.clamp(cursor);
        if cursor.box_index + 1 < self.boxes_per_image {
            Cursor::new(cursor.image_index, cursor.box_index + 1)
        } else if cursor.image_index + 1 < self.image_count {
            Cursor::new(cursor.image_index + 1, 0)
        } else {
            cursor
        }
    }

    /// Moves one box back, crossing into the last box of the previous image.
    ///
    /// At the first box of the first image the cursor is returned unchanged.
    #[must_use]
    pub fn retreat(&self, cursor: Cursor) -> Cursor {
        if self.is_empty() {
            return cursor;
        }
        let cursor = self.clamp(cursor);
        if cursor.box_index > 0 {
            Cursor::new(cursor.image_index, cursor.box_index - 1)
        } else if cursor.image_index > 0 {
            Cursor::new(cursor.image_index - 1, self.boxes_per_image - 1)
        } else {
            cursor
        }
    }

    /// Applies [`Self::advance`] to a navigation state. `Empty` stays `Empty`.
    #[must_use]
    pub fn advance_navigation(&self, navigation: Navigation) -> Navigation {
        match navigation {
            Navigation::Empty => Navigation::Empty,
            Navigation::Browsing(cursor) => Navigation::Browsing(self.advance(cursor)),
        }
    }

    /// Applies [`Self::retreat`] to a navigation state. `Empty` stays `Empty`.
    #[must_use]
    pub fn retreat_navigation(&self, navigation: Navigation) -> Navigation {
        match navigation {
            Navigation::Empty => Navigation::Empty,
            Navigation::Browsing(cursor) => Navigation::Browsing(self.retreat(cursor)),
        }
    }

    /// Guard for the "previous" control.
    ///
    /// Judged on the clamped cursor, so it agrees with [`Self::retreat`].
    #[must_use]
    pub fn is_at_start(&self, cursor: Cursor) -> bool {
        self.clamp(cursor) == Cursor::START
    }

    /// Guard for the "next" control. Always true for an empty session.
    #[must_use]
    pub fn is_at_end(&self, cursor: Cursor) -> bool {
        if self.is_empty() {
            return true;
        }
        let cursor = self.clamp(cursor);
        cursor.image_index == self.image_count - 1 && cursor.box_index == self.boxes_per_image - 1
    }

    /// Zero-based reading-order position of `cursor` among all boxes.
    ///
    /// Stray cursors count from their clamped box.
    #[must_use]
    pub fn position(&self, cursor: Cursor) -> usize {
        let cursor = self.clamp(cursor);
        cursor
            .image_index
            .saturating_mul(self.boxes_per_image)
            .saturating_add(cursor.box_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIGS: [(usize, usize); 6] = [(1, 1), (1, 6), (3, 1), (3, 4), (20, 6), (7, 3)];

    fn browsing(image_count: usize, boxes_per_image: usize) -> Navigator {
        let (navigator, navigation) = Navigator::initialize(image_count, boxes_per_image).unwrap();
        assert_eq!(navigation, Navigation::Browsing(Cursor::START));
        navigator
    }

    fn end_cursor(navigator: &Navigator) -> Cursor {
        Cursor::new(navigator.image_count() - 1, navigator.boxes_per_image() - 1)
    }

    fn advance_times(navigator: &Navigator, mut cursor: Cursor, times: usize) -> Cursor {
        for _ in 0..times {
            cursor = navigator.advance(cursor);
        }
        cursor
    }

    #[test]
    fn test_initialize_starts_browsing_at_origin() {
        // Act
        let (navigator, navigation) = Navigator::initialize(20, DEFAULT_BOXES_PER_IMAGE).unwrap();

        // Assert
        assert_eq!(navigation, Navigation::Browsing(Cursor::new(0, 0)));
        assert_eq!(navigator.image_count(), 20);
        assert_eq!(navigator.boxes_per_image(), 6);
        assert_eq!(navigator.total_boxes(), 120);
    }

    #[test]
    fn test_initialize_with_zero_images_is_empty() {
        // Act
        let (navigator, navigation) = Navigator::initialize(0, 6).unwrap();

        // Assert
        assert_eq!(navigation, Navigation::Empty);
        assert!(navigator.is_empty());
        assert_eq!(navigation.cursor(), None);
    }

    #[test]
    fn test_initialize_with_zero_boxes_fails_with_invalid_configuration() {
        // Act
        let result = Navigator::initialize(3, 0);

        // Assert
        match result {
            Err(DomainError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("boxes_per_image"));
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_transitions_in_empty_state_are_no_ops() {
        // Arrange
        let (navigator, navigation) = Navigator::initialize(0, 6).unwrap();

        // Act & Assert
        assert_eq!(navigator.advance_navigation(navigation), Navigation::Empty);
        assert_eq!(navigator.retreat_navigation(navigation), Navigation::Empty);
        assert_eq!(navigator.advance(Cursor::START), Cursor::START);
        assert_eq!(navigator.retreat(Cursor::START), Cursor::START);
        assert!(navigator.is_at_start(Cursor::START));
        assert!(navigator.is_at_end(Cursor::START));
    }

    #[test]
    fn test_default_config_scenario_walks_boxes_then_images() {
        // Arrange
        let navigator = browsing(20, 6);

        // Act
        let after_five = advance_times(&navigator, Cursor::START, 5);
        let after_six = navigator.advance(after_five);
        let after_all = advance_times(&navigator, Cursor::START, 119);

        // Assert
        assert_eq!(after_five, Cursor::new(0, 5));
        assert_eq!(after_six, Cursor::new(1, 0));
        assert_eq!(after_all, Cursor::new(19, 5));
        assert!(navigator.is_at_end(after_all));
    }

    #[test]
    fn test_advancing_through_every_box_reaches_unique_end_and_stays() {
        for (images, boxes) in CONFIGS {
            // Arrange
            let navigator = browsing(images, boxes);
            let steps = images * boxes - 1;
            let mut cursor = Cursor::START;

            // Act
            for step in 0..steps {
                assert!(
                    !navigator.is_at_end(cursor),
                    "premature end at step {step} for {images}x{boxes}"
                );
                cursor = navigator.advance(cursor);
                assert_eq!(navigator.position(cursor), step + 1);
            }

            // Assert
            assert!(navigator.is_at_end(cursor));
            assert_eq!(cursor, end_cursor(&navigator));
            assert_eq!(navigator.advance(cursor), cursor);
            assert_eq!(navigator.advance(navigator.advance(cursor)), cursor);
        }
    }

    #[test]
    fn test_retreating_from_end_returns_to_start_and_stays() {
        for (images, boxes) in CONFIGS {
            // Arrange
            let navigator = browsing(images, boxes);
            let mut cursor = end_cursor(&navigator);

            // Act
            for _ in 0..(images * boxes - 1) {
                assert!(!navigator.is_at_start(cursor));
                cursor = navigator.retreat(cursor);
            }

            // Assert
            assert_eq!(cursor, Cursor::START);
            assert!(navigator.is_at_start(cursor));
            assert_eq!(navigator.retreat(cursor), Cursor::START);
        }
    }

    #[test]
    fn test_advance_then_retreat_is_identity_away_from_edges() {
        for (images, boxes) in CONFIGS {
            let navigator = browsing(images, boxes);
            for image_index in 0..images {
                for box_index in 0..boxes {
                    let cursor = Cursor::new(image_index, box_index);
                    if navigator.is_at_end(cursor) {
                        continue;
                    }

                    assert_eq!(navigator.retreat(navigator.advance(cursor)), cursor);
                    if !navigator.is_at_start(cursor) {
                        assert_eq!(navigator.advance(navigator.retreat(cursor)), cursor);
                    }
                }
            }
        }
    }

    #[test]
    fn test_is_at_start_only_at_origin() {
        let navigator = browsing(4, 3);
        let mut cursor = Cursor::START;
        assert!(navigator.is_at_start(cursor));

        for _ in 0..(navigator.total_boxes() - 1) {
            cursor = navigator.advance(cursor);
            assert!(!navigator.is_at_start(cursor));
        }
    }

    #[test]
    fn test_retreat_from_first_box_moves_to_last_box_of_previous_image() {
        let navigator = browsing(20, 6);

        assert_eq!(navigator.retreat(Cursor::new(1, 0)), Cursor::new(0, 5));
    }

    #[test]
    fn test_single_box_session_is_both_start_and_end() {
        let navigator = browsing(1, 1);

        assert!(navigator.is_at_start(Cursor::START));
        assert!(navigator.is_at_end(Cursor::START));
        assert_eq!(navigator.advance(Cursor::START), Cursor::START);
        assert_eq!(navigator.retreat(Cursor::START), Cursor::START);
    }

    #[test]
    fn test_out_of_range_cursor_is_clamped_before_transition() {
        // Arrange
        let navigator = browsing(3, 6);
        let stray = Cursor::new(9, 42);

        // Act & Assert
        assert!(!navigator.contains(stray));
        assert_eq!(navigator.clamp(stray), Cursor::new(2, 5));
        assert_eq!(navigator.advance(stray), Cursor::new(2, 5));
        assert_eq!(navigator.retreat(stray), Cursor::new(2, 4));
    }

    #[test]
    fn test_guards_agree_with_transitions_for_stray_cursor() {
        // Arrange
        let navigator = browsing(3, 6);
        let past_end = Cursor::new(9, 42);
        let past_first_image = Cursor::new(0, 42);

        // Act & Assert
        assert!(navigator.is_at_end(past_end));
        assert_eq!(navigator.advance(past_end), Cursor::new(2, 5));
        assert!(!navigator.is_at_start(past_end));
        assert!(!navigator.is_at_end(past_first_image));
        assert!(!navigator.is_at_start(past_first_image));
    }

    #[test]
    fn test_position_of_stray_cursor_counts_from_clamped_box() {
        // Arrange
        let navigator = browsing(20, 6);
        let stray = Cursor::new(usize::MAX, 0);

        // Act
        let position = navigator.position(stray);

        // Assert
        assert_eq!(position, navigator.position(Cursor::new(19, 0)));
        assert_eq!(position, 114);
        assert_eq!(navigator.position(Cursor::new(usize::MAX, usize::MAX)), 119);
        assert_eq!(navigator.advance(stray), Cursor::new(19, 1));
    }

    #[test]
    fn test_navigation_serializes_with_state_tag() {
        let browsing = Navigation::Browsing(Cursor::new(1, 2));

        let json = serde_json::to_value(browsing).unwrap();
        let empty = serde_json::to_value(Navigation::Empty).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "state": "browsing", "image_index": 1, "box_index": 2 })
        );
        assert_eq!(empty, serde_json::json!({ "state": "empty" }));
    }

    #[test]
    fn test_default_config_is_valid_with_six_boxes() {
        let config = NavigatorConfig::default();

        assert_eq!(config.boxes_per_image, 6);
        assert!(config.validate().is_ok());
    }
}
