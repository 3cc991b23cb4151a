//! Route modules.

pub mod composites;
pub mod health;
pub mod sessions;
