//! Mock `BookRepository` implementations for tests.

use async_trait::async_trait;
use folio_catalog::domain::book::Book;
use folio_catalog::domain::repository::BookRepository;
use folio_core::error::DomainError;
use uuid::Uuid;

/// A book repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingBookRepository;

#[async_trait]
impl BookRepository for FailingBookRepository {
    async fn find_book(&self, _id: Uuid) -> Result<Option<Book>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list_books(&self) -> Result<Vec<Book>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save_book(&self, _book: Book) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete_book(&self, _id: Uuid) -> Result<Option<Book>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
