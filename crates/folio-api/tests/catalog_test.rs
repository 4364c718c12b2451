//! Integration tests for the Book Catalog and its administration.

mod common;

use axum::http::StatusCode;
use folio_catalog::domain::book::Book;
use rust_decimal::Decimal;
use uuid::Uuid;

fn book(name: &str, genre: &str) -> Book {
    let mut book = Book::new(Uuid::new_v4(), name, Decimal::from(10));
    book.description = format!("About {name}");
    book.genre = genre.to_owned();
    book
}

#[tokio::test]
async fn test_admin_saved_book_is_browsable() {
    let app = common::build_test_app(Vec::new());

    // POST /api/v1/admin/books
    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/admin/books",
        &serde_json::json!({
            "name": "Dune",
            "author": "Frank Herbert",
            "description": "Desert planet",
            "genre": "Science Fiction",
            "price": "9.99"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let book_id = json["id"].as_str().unwrap().to_owned();

    // GET /api/v1/books/{id}
    let (status, json) = common::get_json(app.clone(), &format!("/api/v1/books/{book_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Dune");
    assert_eq!(json["price"], "9.99");

    // GET /api/v1/books/genres
    let (status, json) = common::get_json(app, "/api/v1/books/genres").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!(["Science Fiction"]));
}

#[tokio::test]
async fn test_admin_update_replaces_existing_book() {
    let existing = book("Dune", "Science Fiction");
    let app = common::build_test_app(vec![existing.clone()]);

    let (status, _) = common::post_json(
        app.clone(),
        "/api/v1/admin/books",
        &serde_json::json!({
            "book_id": existing.id,
            "name": "Dune Messiah",
            "description": "Sequel",
            "genre": "Science Fiction",
            "price": "11.00"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = common::get_json(app, "/api/v1/admin/books").await;
    assert_eq!(status, StatusCode::OK);
    let books = json.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Dune Messiah");
    assert_eq!(books[0]["price"], "11.00");
}

#[tokio::test]
async fn test_admin_rejects_negative_price() {
    let app = common::build_test_app(Vec::new());

    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/admin/books",
        &serde_json::json!({
            "name": "Dune",
            "description": "Desert planet",
            "genre": "Science Fiction",
            "price": "-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert!(json["message"].as_str().unwrap().contains("price"));

    let (_, json) = common::get_json(app, "/api/v1/books").await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_deleted_book_is_no_longer_listed() {
    let kept = book("Emma", "Classics");
    let removed = book("Dune", "Science Fiction");
    let app = common::build_test_app(vec![kept.clone(), removed.clone()]);

    let (status, json) =
        common::delete_json(app.clone(), &format!("/api/v1/admin/books/{}", removed.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Dune");

    let (status, json) = common::get_json(app.clone(), "/api/v1/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], kept.id.to_string());

    let (status, _) = common::get_json(app, &format!("/api/v1/books/{}", removed.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_genre_filter_ignores_case() {
    let app = common::build_test_app(vec![
        book("Emma", "Classics"),
        book("Dune", "Science Fiction"),
        book("Persuasion", "Classics"),
    ]);

    let (status, json) = common::get_json(app, "/api/v1/books?genre=classics").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Emma", "Persuasion"]);
}
