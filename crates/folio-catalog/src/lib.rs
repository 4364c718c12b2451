//! Book Catalog bounded context.
//!
//! Owns the book records the storefront sells: lookup by identifier for the
//! cart, listings for customers, and save/delete for administrators.

pub mod application;
pub mod domain;
pub mod infrastructure;
