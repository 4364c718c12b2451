//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio_api::state::AppState;
use folio_cart::domain::order_processor::OrderProcessor;
use folio_cart::infrastructure::dispatchers::FileDispatcher;
use folio_cart::infrastructure::notification::{NotificationOrderProcessor, NotificationSettings};
use folio_catalog::domain::book::Book;
use folio_catalog::infrastructure::in_memory::InMemoryBookRepository;
use folio_core::clock::Clock;
use folio_test_support::{FixedClock, RecordingOrderProcessor};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router over an in-memory catalog holding `books`.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app(books: Vec<Book>) -> Router {
    build_test_app_with_processor(books, Arc::new(RecordingOrderProcessor::new()))
}

/// Build the full app router with a custom order processor.
pub fn build_test_app_with_processor(
    books: Vec<Book>,
    order_processor: Arc<dyn OrderProcessor>,
) -> Router {
    let book_repository = Arc::new(InMemoryBookRepository::with_books(books));
    folio_api::build_router(AppState::new(book_repository, order_processor))
}

/// Build the full app router with order notifications written as files into
/// `directory`.
pub fn build_test_app_writing_orders_to(books: Vec<Book>, directory: &Path) -> Router {
    let processor = NotificationOrderProcessor::new(
        NotificationSettings {
            mail_to: "orders@folio.example".to_owned(),
            mail_from: "store@folio.example".to_owned(),
        },
        fixed_clock(),
        Arc::new(FileDispatcher::new(directory)),
    );
    build_test_app_with_processor(books, Arc::new(processor))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
