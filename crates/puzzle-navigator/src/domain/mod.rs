//! Pure navigation state and transitions.

pub mod cursor;
pub mod navigator;
