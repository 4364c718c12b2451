//! Commands for the Book Catalog context.

use rust_decimal::Decimal;
use uuid::Uuid;

/// Command to create or update a book.
#[derive(Debug, Clone)]
pub struct SaveBook {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The book to update, or `None` to create a new one.
    pub book_id: Option<Uuid>,
    /// Title.
    pub name: String,
    /// Author line.
    pub author: String,
    /// Short description.
    pub description: String,
    /// Genre.
    pub genre: String,
    /// Unit price.
    pub price: Decimal,
}

/// Command to delete a book.
#[derive(Debug, Clone)]
pub struct DeleteBook {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The book identifier.
    pub book_id: Uuid,
}
