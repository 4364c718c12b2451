//! Routes for the Shopping Cart & Checkout bounded context.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    Json, Router,
    routing::{get, post},
};
use folio_cart::application::command_handlers;
use folio_cart::application::query_handlers::{CartView, view_cart};
use folio_cart::domain::checkout::{CheckoutOutcome, RejectionReason};
use folio_cart::domain::commands;
use folio_cart::domain::shipping::{FieldError, ShippingDetails, validate_shipping_details};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

fn default_quantity() -> i32 {
    1
}

/// Request body for POST /{cart_id}/add-item.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// The book to add.
    pub book_id: Uuid,
    /// Copies to add.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

/// Request body for POST /{cart_id}/remove-line.
#[derive(Debug, Deserialize)]
pub struct RemoveLineRequest {
    /// The book whose line is removed.
    pub book_id: Uuid,
}

/// Response body for POST /.
#[derive(Debug, Serialize)]
pub struct CreateCartResponse {
    /// Identifier of the new cart.
    pub cart_id: Uuid,
}

/// Response body for POST /{cart_id}/checkout.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutResponse {
    /// The order was submitted and the cart emptied.
    Confirmed,
    /// The order was not submitted; cart and shipping details are echoed
    /// back for correction.
    Rejected {
        /// Machine-readable reason.
        reason: RejectionReason,
        /// Human-readable reason.
        message: String,
        /// Offending shipping fields.
        field_errors: Vec<FieldError>,
        /// The shipping details as submitted.
        shipping: ShippingDetails,
        /// The unchanged cart.
        cart: CartView,
    },
}

impl IntoResponse for CheckoutResponse {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Confirmed => StatusCode::OK,
            Self::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(self)).into_response()
    }
}

/// POST /
#[instrument(skip(state))]
async fn create_cart(State(state): State<AppState>) -> (StatusCode, Json<CreateCartResponse>) {
    let cart_id = state.carts.create().await;
    info!(%cart_id, "cart created");
    (StatusCode::CREATED, Json(CreateCartResponse { cart_id }))
}

/// GET /{cart_id}
#[instrument(skip(state))]
async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> Result<Json<CartView>, ApiError> {
    let cart = state.carts.get(cart_id).await?;
    let cart = cart.lock().await;
    Ok(Json(view_cart(cart_id, &cart)?))
}

/// DELETE /{cart_id}
#[instrument(skip(state))]
async fn delete_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.carts.remove(cart_id).await?;
    info!(%cart_id, "cart session ended");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /{cart_id}/add-item
#[instrument(skip(state, request), fields(book_id = %request.book_id))]
async fn add_item(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartView>, ApiError> {
    let command = commands::AddToCart {
        correlation_id: Uuid::new_v4(),
        book_id: request.book_id,
        quantity: request.quantity,
    };

    info!(correlation_id = %command.correlation_id, "handling add_to_cart command");

    let cart = state.carts.get(cart_id).await?;
    let mut cart = cart.lock().await;
    command_handlers::handle_add_to_cart(&command, &mut cart, &*state.book_repository).await?;

    Ok(Json(view_cart(cart_id, &cart)?))
}

/// POST /{cart_id}/remove-line
#[instrument(skip(state, request), fields(book_id = %request.book_id))]
async fn remove_line(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
    Json(request): Json<RemoveLineRequest>,
) -> Result<Json<CartView>, ApiError> {
    let command = commands::RemoveFromCart {
        correlation_id: Uuid::new_v4(),
        book_id: request.book_id,
    };

    let cart = state.carts.get(cart_id).await?;
    let mut cart = cart.lock().await;
    command_handlers::handle_remove_from_cart(&command, &mut cart);

    Ok(Json(view_cart(cart_id, &cart)?))
}

/// POST /{cart_id}/clear
#[instrument(skip(state))]
async fn clear(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> Result<Json<CartView>, ApiError> {
    let command = commands::ClearCart {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling clear_cart command");

    let cart = state.carts.get(cart_id).await?;
    let mut cart = cart.lock().await;
    command_handlers::handle_clear_cart(&command, &mut cart);

    Ok(Json(view_cart(cart_id, &cart)?))
}

/// POST /{cart_id}/checkout
#[instrument(skip(state, shipping))]
async fn checkout(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
    Json(shipping): Json<ShippingDetails>,
) -> Result<CheckoutResponse, ApiError> {
    let command = commands::Checkout {
        correlation_id: Uuid::new_v4(),
        shipping,
    };

    info!(correlation_id = %command.correlation_id, "handling checkout command");

    let validation = validate_shipping_details(&command.shipping);
    let cart = state.carts.get(cart_id).await?;
    let mut cart = cart.lock().await;
    let outcome = command_handlers::handle_checkout(
        &command,
        &mut cart,
        &validation,
        &*state.order_processor,
    )
    .await?;

    Ok(match outcome {
        CheckoutOutcome::Confirmed => CheckoutResponse::Confirmed,
        CheckoutOutcome::Rejected {
            reason,
            field_errors,
        } => CheckoutResponse::Rejected {
            reason,
            message: reason.to_string(),
            field_errors,
            shipping: command.shipping,
            cart: view_cart(cart_id, &cart)?,
        },
    })
}

/// Returns the router for the cart context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/{cart_id}", get(get_cart).delete(delete_cart))
        .route("/{cart_id}/add-item", post(add_item))
        .route("/{cart_id}/remove-line", post(remove_line))
        .route("/{cart_id}/clear", post(clear))
        .route("/{cart_id}/checkout", post(checkout))
}
