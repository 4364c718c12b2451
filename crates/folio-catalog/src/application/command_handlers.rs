//! Command handlers for the Book Catalog context.
//!
//! These back the administration surface: validate the submitted book, then
//! persist or remove it through the repository.

use folio_core::error::DomainError;
use tracing::info;
use uuid::Uuid;

use crate::domain::book::Book;
use crate::domain::commands::{DeleteBook, SaveBook};
use crate::domain::repository::BookRepository;

/// Handles the `SaveBook` command: builds the book, validates it and upserts
/// it. Invalid books never reach the repository.
///
/// # Errors
///
/// Returns `DomainError::Validation` if a required field is blank or the
/// price is negative, or the repository error if saving fails.
pub async fn handle_save_book(
    command: &SaveBook,
    repo: &dyn BookRepository,
) -> Result<Book, DomainError> {
    let book = Book {
        id: command.book_id.unwrap_or_else(Uuid::new_v4),
        name: command.name.trim().to_owned(),
        author: command.author.trim().to_owned(),
        description: command.description.trim().to_owned(),
        genre: command.genre.trim().to_owned(),
        price: command.price,
    };
    book.validate()?;

    repo.save_book(book.clone()).await?;

    info!(
        correlation_id = %command.correlation_id,
        book_id = %book.id,
        "book saved"
    );
    Ok(book)
}

/// Handles the `DeleteBook` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the book does not exist.
pub async fn handle_delete_book(
    command: &DeleteBook,
    repo: &dyn BookRepository,
) -> Result<Book, DomainError> {
    let deleted = repo
        .delete_book(command.book_id)
        .await?
        .ok_or(DomainError::NotFound(command.book_id))?;

    info!(
        correlation_id = %command.correlation_id,
        book_id = %deleted.id,
        "book deleted"
    );
    Ok(deleted)
}
