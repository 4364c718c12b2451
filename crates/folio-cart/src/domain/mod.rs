//! Domain layer for the Shopping Cart & Checkout context.

pub mod cart;
pub mod checkout;
pub mod commands;
pub mod order_processor;
pub mod shipping;
