//! Session view orchestration over the navigator.

pub mod session_view;
pub mod snapshot;
