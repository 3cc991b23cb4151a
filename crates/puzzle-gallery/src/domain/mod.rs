//! Domain types for the Gallery context.

pub mod commands;
pub mod upload;
