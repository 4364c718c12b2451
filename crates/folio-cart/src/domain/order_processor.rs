//! Order processor capability.

use async_trait::async_trait;
use folio_core::error::DomainError;
use thiserror::Error;

use super::cart::Cart;
use super::shipping::ShippingDetails;

/// Errors an order processor may report.
#[derive(Debug, Error)]
pub enum OrderProcessingError {
    /// The order notification could not be delivered.
    #[error("order notification dispatch failed: {0}")]
    Dispatch(String),

    /// Writing the order to disk failed.
    #[error("order could not be written: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be rendered as an order.
    #[error("order is not valid: {0}")]
    InvalidOrder(#[from] DomainError),
}

/// Submits a finalized order.
///
/// The checkout workflow calls this at most once per attempt and only cares
/// whether it succeeded.
#[async_trait]
pub trait OrderProcessor: Send + Sync {
    /// Submit the order described by `cart` and `shipping`.
    async fn process_order(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<(), OrderProcessingError>;
}
