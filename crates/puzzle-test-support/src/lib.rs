//! Shared test mocks and utilities for the puzzle piece browser.

mod clock;
mod collaborator;
mod fixtures;
mod store;

pub use clock::FixedClock;
pub use collaborator::{FailingImageCollaborator, StaticImageCollaborator};
pub use fixtures::{fixed_now, piece_images};
pub use store::{FailingImageStore, RecordingImageStore};
