//! Canned values shared across tests.

use chrono::{DateTime, TimeZone, Utc};
use puzzle_core::image::PieceImage;

/// Fixed timestamp used across tests.
///
/// # Panics
///
/// Never in practice; the date is a valid UTC timestamp.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// `count` piece images labelled `Piece 1` through `Piece {count}`.
#[must_use]
pub fn piece_images(count: usize) -> Vec<PieceImage> {
    (1..=count)
        .map(|n| PieceImage::new(format!("data:image/png;base64,PIECE{n}"), format!("Piece {n}")))
        .collect()
}
