//! Query handlers for the Book Catalog context.

use folio_core::error::DomainError;
use uuid::Uuid;

use crate::domain::book::Book;
use crate::domain::repository::BookRepository;

/// Lists the catalog ordered by name, optionally restricted to one genre.
/// Genre matching ignores ASCII case.
///
/// # Errors
///
/// Returns the repository error if loading fails.
pub async fn list_books(
    genre: Option<&str>,
    repo: &dyn BookRepository,
) -> Result<Vec<Book>, DomainError> {
    let mut books = repo.list_books().await?;
    if let Some(genre) = genre {
        books.retain(|book| book.genre.eq_ignore_ascii_case(genre));
    }
    books.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(books)
}

/// Lists the distinct genres present in the catalog, sorted.
///
/// # Errors
///
/// Returns the repository error if loading fails.
pub async fn list_genres(repo: &dyn BookRepository) -> Result<Vec<String>, DomainError> {
    let mut genres: Vec<String> = repo
        .list_books()
        .await?
        .into_iter()
        .map(|book| book.genre)
        .collect();
    genres.sort();
    genres.dedup();
    Ok(genres)
}

/// Retrieves a single book.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no book has the given identifier.
pub async fn get_book(book_id: Uuid, repo: &dyn BookRepository) -> Result<Book, DomainError> {
    repo.find_book(book_id)
        .await?
        .ok_or(DomainError::NotFound(book_id))
}
