//! Application services for the Gallery context.

pub mod collaborator;
pub mod command_handlers;
pub mod query_handlers;
