//! Book repository abstraction.

use async_trait::async_trait;
use folio_core::error::DomainError;
use uuid::Uuid;

use super::book::Book;

/// Repository trait for reading and maintaining the catalog.
///
/// The cart only ever calls `find_book`; the remaining methods back the
/// listing and administration surfaces.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Look up a single book. `Ok(None)` means the identifier is unknown.
    async fn find_book(&self, id: Uuid) -> Result<Option<Book>, DomainError>;

    /// Load every book in the catalog.
    async fn list_books(&self) -> Result<Vec<Book>, DomainError>;

    /// Insert a new book or replace the existing one with the same id.
    async fn save_book(&self, book: Book) -> Result<(), DomainError>;

    /// Remove a book, returning it if it existed.
    async fn delete_book(&self, id: Uuid) -> Result<Option<Book>, DomainError>;
}
