//! In-process implementation of the `BookRepository` trait.

use async_trait::async_trait;
use folio_core::error::DomainError;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::book::Book;
use crate::domain::repository::BookRepository;

/// Book repository that keeps the catalog in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with `books`.
    #[must_use]
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_book(&self, id: Uuid) -> Result<Option<Book>, DomainError> {
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    async fn list_books(&self) -> Result<Vec<Book>, DomainError> {
        Ok(self.books.read().await.clone())
    }

    async fn save_book(&self, book: Book) -> Result<(), DomainError> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|existing| existing.id == book.id) {
            Some(existing) => *existing = book,
            None => books.push(book),
        }
        Ok(())
    }

    async fn delete_book(&self, id: Uuid) -> Result<Option<Book>, DomainError> {
        let mut books = self.books.write().await;
        let position = books.iter().position(|book| book.id == id);
        Ok(position.map(|index| books.remove(index)))
    }
}
