//! Integration tests for the Shopping Cart & Checkout bounded context.

mod common;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use folio_catalog::domain::book::Book;
use folio_test_support::{FailingOrderProcessor, RecordingOrderProcessor};
use rust_decimal::Decimal;
use uuid::Uuid;

fn catalog() -> (Book, Book) {
    (
        Book::new(Uuid::new_v4(), "Book1", Decimal::from(100)),
        Book::new(Uuid::new_v4(), "Book2", Decimal::from(55)),
    )
}

fn shipping() -> serde_json::Value {
    serde_json::json!({
        "name": "Bilbo Baggins",
        "line1": "Bag End",
        "line2": "Bagshot Row",
        "city": "Hobbiton",
        "country": "The Shire",
        "gift_wrap": false
    })
}

async fn open_cart(app: &Router) -> String {
    let (status, json) = common::post_empty(app.clone(), "/api/v1/carts").await;
    assert_eq!(status, StatusCode::CREATED);
    json["cart_id"].as_str().unwrap().to_owned()
}

async fn add_item(app: &Router, cart_id: &str, book_id: Uuid, quantity: i32) -> serde_json::Value {
    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/carts/{cart_id}/add-item"),
        &serde_json::json!({ "book_id": book_id, "quantity": quantity }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}

#[tokio::test]
async fn test_cart_totals_merge_repeated_books() {
    let (book1, book2) = catalog();
    let app = common::build_test_app(vec![book1.clone(), book2.clone()]);
    let cart_id = open_cart(&app).await;

    add_item(&app, &cart_id, book1.id, 1).await;
    add_item(&app, &cart_id, book2.id, 1).await;
    let json = add_item(&app, &cart_id, book1.id, 5).await;

    assert_eq!(json["line_count"], 2);
    assert_eq!(json["total_quantity"], 7);
    assert_eq!(json["total_value"], "655");
    assert_eq!(json["lines"][0]["book_id"], book1.id.to_string());
    assert_eq!(json["lines"][0]["quantity"], 6);
    assert_eq!(json["lines"][0]["line_total"], "600");
}

#[tokio::test]
async fn test_remove_line_and_clear() {
    let (book1, book2) = catalog();
    let app = common::build_test_app(vec![book1.clone(), book2.clone()]);
    let cart_id = open_cart(&app).await;
    add_item(&app, &cart_id, book1.id, 1).await;
    add_item(&app, &cart_id, book2.id, 2).await;

    // POST /remove-line
    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/carts/{cart_id}/remove-line"),
        &serde_json::json!({ "book_id": book1.id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["line_count"], 1);
    assert_eq!(json["total_value"], "110");

    // POST /clear
    let (status, json) =
        common::post_empty(app.clone(), &format!("/api/v1/carts/{cart_id}/clear")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["line_count"], 0);

    // GET /{cart_id}
    let (status, json) = common::get_json(app, &format!("/api/v1/carts/{cart_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_value"], "0");
}

#[tokio::test]
async fn test_checkout_writes_order_file_and_empties_cart() {
    let orders = tempfile::tempdir().unwrap();
    let (book1, book2) = catalog();
    let app = common::build_test_app_writing_orders_to(
        vec![book1.clone(), book2.clone()],
        orders.path(),
    );
    let cart_id = open_cart(&app).await;
    add_item(&app, &cart_id, book1.id, 2).await;
    add_item(&app, &cart_id, book2.id, 1).await;

    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/carts/{cart_id}/checkout"),
        &shipping(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "confirmed");

    let (_, json) = common::get_json(app, &format!("/api/v1/carts/{cart_id}")).await;
    assert_eq!(json["line_count"], 0);

    let files: Vec<_> = std::fs::read_dir(orders.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let file_name = files[0].file_name().unwrap().to_str().unwrap().to_owned();
    assert!(file_name.starts_with("20260115T100000Z-"));
    assert!(file_name.ends_with(".eml"));

    let message = std::fs::read_to_string(&files[0]).unwrap();
    assert!(message.contains("Subject: New order submitted!\r\n"));
    assert!(message.contains("2 x Book1 (subtotal: 200)\r\n"));
    assert!(message.contains("1 x Book2 (subtotal: 55)\r\n"));
    assert!(message.contains("Total order value: 255\r\n"));
    assert!(message.contains("Bag End\r\nBagshot Row\r\nHobbiton\r\n"));
    assert!(message.contains("Gift wrap: No\r\n"));
}

#[tokio::test]
async fn test_rejected_checkout_keeps_cart_for_correction() {
    let (book1, _) = catalog();
    let processor = Arc::new(RecordingOrderProcessor::new());
    let app = common::build_test_app_with_processor(vec![book1.clone()], processor.clone());
    let cart_id = open_cart(&app).await;
    add_item(&app, &cart_id, book1.id, 1).await;

    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/carts/{cart_id}/checkout"),
        &serde_json::json!({ "name": "Bilbo Baggins", "line1": "Bag End", "city": "Hobbiton" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["reason"], "invalid_shipping_details");
    assert_eq!(json["field_errors"][0]["field"], "country");
    assert_eq!(json["shipping"]["city"], "Hobbiton");
    assert_eq!(processor.call_count(), 0);

    // Corrected details go through.
    let (status, _) = common::post_json(
        app.clone(),
        &format!("/api/v1/carts/{cart_id}/checkout"),
        &shipping(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(processor.call_count(), 1);
    assert_eq!(processor.orders()[0].0.lines()[0].book.id, book1.id);
}

#[tokio::test]
async fn test_failed_order_processing_keeps_cart() {
    let (book1, _) = catalog();
    let processor = Arc::new(FailingOrderProcessor::new());
    let app = common::build_test_app_with_processor(vec![book1.clone()], processor.clone());
    let cart_id = open_cart(&app).await;
    add_item(&app, &cart_id, book1.id, 4).await;

    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/carts/{cart_id}/checkout"),
        &shipping(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"], "order_processing_error");
    assert_eq!(processor.call_count(), 1);

    let (_, json) = common::get_json(app, &format!("/api/v1/carts/{cart_id}")).await;
    assert_eq!(json["lines"][0]["quantity"], 4);
    assert_eq!(json["total_value"], "400");
}

#[tokio::test]
async fn test_unknown_cart_returns_404() {
    let app = common::build_test_app(Vec::new());

    let (status, json) =
        common::get_json(app, &format!("/api/v1/carts/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_deleted_cart_returns_404() {
    let (book1, _) = catalog();
    let app = common::build_test_app(vec![book1.clone()]);
    let cart_id = open_cart(&app).await;
    add_item(&app, &cart_id, book1.id, 1).await;

    let request = axum::http::Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/carts/{cart_id}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, json) = common::get_json(app.clone(), &format!("/api/v1/carts/{cart_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");

    let (status, _) = common::delete_json(app, &format!("/api/v1/carts/{cart_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quantities_past_i32_max_add_up_exactly() {
    let (book1, _) = catalog();
    let app = common::build_test_app(vec![book1.clone()]);
    let cart_id = open_cart(&app).await;

    add_item(&app, &cart_id, book1.id, i32::MAX).await;
    let json = add_item(&app, &cart_id, book1.id, 10).await;

    assert_eq!(json["lines"][0]["quantity"], 2_147_483_657_i64);
    assert_eq!(json["total_quantity"], 2_147_483_657_i64);
    assert_eq!(json["total_value"], "214748365700");
}
