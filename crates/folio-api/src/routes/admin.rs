//! Routes for catalog administration.

use axum::extract::{Path, State};
use axum::{
    Json, Router,
    routing::{delete, get},
};
use folio_catalog::application::{command_handlers, query_handlers};
use folio_catalog::domain::book::Book;
use folio_catalog::domain::commands;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /books.
#[derive(Debug, Deserialize)]
pub struct SaveBookRequest {
    /// Book to update; omit to create a new one.
    pub book_id: Option<Uuid>,
    /// Title.
    pub name: String,
    /// Author line.
    #[serde(default)]
    pub author: String,
    /// Short description.
    pub description: String,
    /// Genre.
    pub genre: String,
    /// Unit price.
    pub price: Decimal,
}

/// GET /books
#[instrument(skip(state))]
async fn index(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = query_handlers::list_books(None, &*state.book_repository).await?;
    Ok(Json(books))
}

/// POST /books
#[instrument(skip(state, request), fields(book_id = ?request.book_id))]
async fn save_book(
    State(state): State<AppState>,
    Json(request): Json<SaveBookRequest>,
) -> Result<Json<Book>, ApiError> {
    let command = commands::SaveBook {
        correlation_id: Uuid::new_v4(),
        book_id: request.book_id,
        name: request.name,
        author: request.author,
        description: request.description,
        genre: request.genre,
        price: request.price,
    };

    info!(correlation_id = %command.correlation_id, "handling save_book command");

    let book = command_handlers::handle_save_book(&command, &*state.book_repository).await?;
    Ok(Json(book))
}

/// DELETE /books/{book_id}
#[instrument(skip(state))]
async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<Book>, ApiError> {
    let command = commands::DeleteBook {
        correlation_id: Uuid::new_v4(),
        book_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_book command");

    let book = command_handlers::handle_delete_book(&command, &*state.book_repository).await?;
    Ok(Json(book))
}

/// Returns the router for catalog administration.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(index).post(save_book))
        .route("/books/{book_id}", delete(delete_book))
}
