//! Application layer for the Book Catalog context.

pub mod command_handlers;
pub mod query_handlers;
