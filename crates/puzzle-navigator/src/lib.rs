//! Puzzle Session Navigator.
//!
//! Tracks which piece image and which box within it is on screen, clamps
//! navigation at the first and last box, and drives the one-shot image fetch
//! for a session view. Framework-agnostic: a presentation layer renders
//! [`application::session_view::ViewSnapshot`] and forwards intents.

pub mod application;
pub mod domain;
