//! Order processor implementations.

pub mod dispatchers;
pub mod notification;
