//! Shared domain abstractions for the Folio crates.
//!
//! This crate defines the error type and the clock abstraction that the
//! catalog and cart contexts depend on. It contains no infrastructure code.

pub mod clock;
pub mod error;
