//! Commands for the Shopping Cart & Checkout context.

use uuid::Uuid;

use super::shipping::ShippingDetails;

/// Command to add copies of a catalog book to a cart.
#[derive(Debug, Clone)]
pub struct AddToCart {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The book identifier.
    pub book_id: Uuid,
    /// Copies to add.
    pub quantity: i32,
}

/// Command to drop a book's line from a cart.
#[derive(Debug, Clone)]
pub struct RemoveFromCart {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The book identifier.
    pub book_id: Uuid,
}

/// Command to empty a cart.
#[derive(Debug, Clone)]
pub struct ClearCart {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

/// Command to submit a cart as an order.
#[derive(Debug, Clone)]
pub struct Checkout {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Where to ship the order.
    pub shipping: ShippingDetails,
}
