//! Puzzle piece browser — Gallery context.
//!
//! Responsible for accepting uploaded piece images, grouping them into
//! sessions, and serving them back to the session navigator.

pub mod application;
pub mod domain;
