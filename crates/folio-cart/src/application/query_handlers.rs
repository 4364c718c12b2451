//! Query handlers for the Shopping Cart & Checkout context.

use folio_core::error::DomainError;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::cart::Cart;

/// Read-only view of one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    /// The book identifier.
    pub book_id: Uuid,
    /// Book title.
    pub name: String,
    /// Unit price.
    pub unit_price: Decimal,
    /// Copies in the cart.
    pub quantity: i64,
    /// Unit price times quantity.
    pub line_total: Decimal,
}

/// Read-only view of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// The cart (session) identifier.
    pub cart_id: Uuid,
    /// Lines in first-add order.
    pub lines: Vec<CartLineView>,
    /// Number of distinct books.
    pub line_count: usize,
    /// Sum of quantities.
    pub total_quantity: i128,
    /// Sum of line totals.
    pub total_value: Decimal,
}

/// Builds the view of `cart`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if a line total or the cart total is not
/// representable.
pub fn view_cart(cart_id: Uuid, cart: &Cart) -> Result<CartView, DomainError> {
    let lines = cart
        .lines()
        .iter()
        .map(|line| {
            Ok(CartLineView {
                book_id: line.book.id,
                name: line.book.name.clone(),
                unit_price: line.book.price,
                quantity: line.quantity,
                line_total: line.line_total()?,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(CartView {
        cart_id,
        lines,
        line_count: cart.len(),
        total_quantity: cart.total_quantity(),
        total_value: cart.compute_total_value()?,
    })
}
