//! Shopping Cart & Checkout bounded context.
//!
//! Accumulates purchase intent in an in-memory [`Cart`](domain::cart::Cart)
//! and turns it into a submitted order through the checkout workflow, which
//! gates submission on a non-empty cart and valid shipping details before
//! handing both to an [`OrderProcessor`](domain::order_processor::OrderProcessor).

pub mod application;
pub mod domain;
pub mod infrastructure;
