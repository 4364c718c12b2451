//! Shared application state.

use std::fmt;
use std::sync::Arc;

use folio_cart::domain::order_processor::OrderProcessor;
use folio_catalog::domain::repository::BookRepository;

use crate::sessions::CartSessions;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog storage.
    pub book_repository: Arc<dyn BookRepository>,
    /// Submits checked-out orders.
    pub order_processor: Arc<dyn OrderProcessor>,
    /// Carts keyed by session.
    pub carts: CartSessions,
}

impl AppState {
    /// Create new application state with no open carts.
    #[must_use]
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        order_processor: Arc<dyn OrderProcessor>,
    ) -> Self {
        Self {
            book_repository,
            order_processor,
            carts: CartSessions::default(),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("carts", &self.carts)
            .finish_non_exhaustive()
    }
}
