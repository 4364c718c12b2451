//! Application layer for the Shopping Cart & Checkout context.

pub mod command_handlers;
pub mod query_handlers;
