//! Command handlers for the Shopping Cart & Checkout context.
//!
//! The cart is owned by the caller and passed in by mutable reference; these
//! handlers resolve collaborators (catalog lookup, order processor) and apply
//! the outcome to it.

use folio_catalog::domain::repository::BookRepository;
use folio_core::error::DomainError;
use tracing::{debug, info, warn};

use crate::domain::cart::Cart;
use crate::domain::checkout::{CheckoutOutcome, RejectionReason};
use crate::domain::commands::{AddToCart, Checkout, ClearCart, RemoveFromCart};
use crate::domain::order_processor::OrderProcessor;
use crate::domain::shipping::ShippingValidation;

/// Handles the `AddToCart` command: looks the book up in the catalog and
/// adds it to `cart`.
///
/// An unknown book id is not an error; the request may reference a book that
/// has since been removed, so nothing is added and `Ok(false)` is returned.
///
/// # Errors
///
/// Returns the repository error if the catalog lookup itself fails, or
/// `DomainError::Validation` if the resulting quantity or cart value would
/// overflow; the cart is unchanged in that case.
pub async fn handle_add_to_cart(
    command: &AddToCart,
    cart: &mut Cart,
    catalog: &dyn BookRepository,
) -> Result<bool, DomainError> {
    let Some(book) = catalog.find_book(command.book_id).await? else {
        warn!(
            correlation_id = %command.correlation_id,
            book_id = %command.book_id,
            "book not in catalog, nothing added"
        );
        return Ok(false);
    };

    cart.add_item(book, command.quantity).inspect_err(|e| {
        warn!(correlation_id = %command.correlation_id, error = %e, "add to cart refused");
    })?;
    debug!(
        correlation_id = %command.correlation_id,
        book_id = %command.book_id,
        quantity = command.quantity,
        "book added to cart"
    );
    Ok(true)
}

/// Handles the `RemoveFromCart` command. Removing a book that is not in the
/// cart leaves it unchanged.
pub fn handle_remove_from_cart(command: &RemoveFromCart, cart: &mut Cart) {
    cart.remove_line(command.book_id);
    debug!(
        correlation_id = %command.correlation_id,
        book_id = %command.book_id,
        "cart line removed"
    );
}

/// Handles the `ClearCart` command.
pub fn handle_clear_cart(command: &ClearCart, cart: &mut Cart) {
    let removed = cart.len();
    cart.clear();
    debug!(correlation_id = %command.correlation_id, removed, "cart cleared");
}

/// Handles the `Checkout` command.
///
/// Rejects an empty cart, then rejects shipping details that `validation`
/// reports as invalid; in both cases the order processor is not called and
/// the cart is untouched. Otherwise the order processor is invoked exactly
/// once and, on success, the cart is cleared.
///
/// # Errors
///
/// Returns `DomainError::OrderProcessing` if the processor fails, or
/// `DomainError::Validation` if the cart total is not representable. The
/// cart keeps its contents in both cases.
pub async fn handle_checkout(
    command: &Checkout,
    cart: &mut Cart,
    validation: &ShippingValidation,
    processor: &dyn OrderProcessor,
) -> Result<CheckoutOutcome, DomainError> {
    if cart.is_empty() {
        debug!(correlation_id = %command.correlation_id, "checkout rejected: empty cart");
        return Ok(CheckoutOutcome::Rejected {
            reason: RejectionReason::EmptyCart,
            field_errors: Vec::new(),
        });
    }

    if let ShippingValidation::Invalid { field_errors } = validation {
        debug!(
            correlation_id = %command.correlation_id,
            invalid_fields = field_errors.len(),
            "checkout rejected: invalid shipping details"
        );
        return Ok(CheckoutOutcome::Rejected {
            reason: RejectionReason::InvalidShippingDetails,
            field_errors: field_errors.clone(),
        });
    }

    let total = cart.compute_total_value()?;

    processor
        .process_order(cart, &command.shipping)
        .await
        .map_err(|e| {
            warn!(correlation_id = %command.correlation_id, error = %e, "order processing failed");
            DomainError::OrderProcessing(e.to_string())
        })?;

    info!(
        correlation_id = %command.correlation_id,
        lines = cart.len(),
        %total,
        "order submitted"
    );
    cart.clear();

    Ok(CheckoutOutcome::Confirmed)
}
