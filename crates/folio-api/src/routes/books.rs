//! Routes for browsing the Book Catalog.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use folio_catalog::application::query_handlers;
use folio_catalog::domain::book::Book;
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /.
#[derive(Debug, Deserialize)]
pub struct ListBooksParams {
    /// Only list books of this genre.
    pub genre: Option<String>,
}

/// GET /
#[instrument(skip(state))]
async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books =
        query_handlers::list_books(params.genre.as_deref(), &*state.book_repository).await?;
    Ok(Json(books))
}

/// GET /genres
#[instrument(skip(state))]
async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let genres = query_handlers::list_genres(&*state.book_repository).await?;
    Ok(Json(genres))
}

/// GET /{book_id}
#[instrument(skip(state))]
async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<Book>, ApiError> {
    let book = query_handlers::get_book(book_id, &*state.book_repository).await?;
    Ok(Json(book))
}

/// Returns the router for the catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books))
        .route("/genres", get(list_genres))
        .route("/{book_id}", get(get_book))
}
