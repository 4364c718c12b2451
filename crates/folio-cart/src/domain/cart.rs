//! The shopping cart aggregate.

use folio_catalog::domain::book::Book;
use folio_core::error::DomainError;
use rust_decimal::Decimal;
use uuid::Uuid;

fn value_out_of_range() -> DomainError {
    DomainError::Validation("cart value exceeds the supported range".to_owned())
}

/// A book and how many copies of it the customer wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Snapshot of the book taken when it was first added.
    pub book: Book,
    /// Number of copies. Not required to be positive.
    pub quantity: i64,
}

impl CartLine {
    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the product is not representable.
    pub fn line_total(&self) -> Result<Decimal, DomainError> {
        self.book
            .price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(value_out_of_range)
    }
}

/// In-memory collection of cart lines for one shopping session.
///
/// Holds at most one line per book identifier. Lines keep the order in which
/// each book was first added. Every line total and the cart total are
/// representable as a `Decimal`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` copies of `book`.
    ///
    /// If a line for the same book id exists its quantity is increased and its
    /// snapshot is kept; otherwise a new line is appended. Zero and negative
    /// quantities are accepted and accumulate like any other value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the resulting quantity or cart
    /// value would overflow. The cart is left unchanged.
    pub fn add_item(&mut self, book: Book, quantity: i32) -> Result<(), DomainError> {
        let quantity = i64::from(quantity);
        let previous = match self.lines.iter().position(|line| line.book.id == book.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                let before = line.quantity;
                line.quantity = before.checked_add(quantity).ok_or_else(value_out_of_range)?;
                Some((index, before))
            }
            None => {
                self.lines.push(CartLine { book, quantity });
                None
            }
        };

        if let Err(err) = self.compute_total_value() {
            match previous {
                Some((index, before)) => self.lines[index].quantity = before,
                None => {
                    self.lines.pop();
                }
            }
            return Err(err);
        }
        Ok(())
    }

    /// Removes the line for `book_id`. Does nothing if there is none.
    pub fn remove_line(&mut self, book_id: Uuid) {
        self.lines.retain(|line| line.book.id != book_id);
    }

    /// Current lines in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of price × quantity over all lines; zero for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a line total or the sum is not
    /// representable.
    pub fn compute_total_value(&self) -> Result<Decimal, DomainError> {
        self.lines.iter().try_fold(Decimal::ZERO, |total, line| {
            total
                .checked_add(line.line_total()?)
                .ok_or_else(value_out_of_range)
        })
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_quantity(&self) -> i128 {
        self.lines.iter().map(|line| i128::from(line.quantity)).sum()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of distinct books in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
