//! Puzzle Core — shared domain abstractions.
//!
//! This crate defines the image types, error type and collaborator traits
//! that the navigator, gallery and API crates depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod collaborator;
pub mod error;
pub mod image;
pub mod repository;
