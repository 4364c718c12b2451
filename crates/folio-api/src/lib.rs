//! Folio bookstore HTTP API.
//!
//! Exposes the catalog, catalog administration and the shopping cart /
//! checkout workflow as JSON endpoints.

pub mod config;
pub mod error;
pub mod routes;
pub mod sessions;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the application router with every route mounted.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/books", routes::books::router())
        .nest("/api/v1/admin", routes::admin::router())
        .nest("/api/v1/carts", routes::carts::router())
        .with_state(app_state)
}
