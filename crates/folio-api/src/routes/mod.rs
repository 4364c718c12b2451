//! Route modules organized by bounded context.

pub mod admin;
pub mod books;
pub mod carts;
pub mod health;
