//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
///
/// User-correctable checkout rejections are not errors; they are reported as
/// a normal checkout outcome.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A catalog entry or cart was not found.
    #[error("not found: {0}")]
    NotFound(Uuid),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// The order processor reported a failure while submitting an order.
    #[error("order processing failed: {0}")]
    OrderProcessing(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
