//! Checkout outcomes.

use std::fmt;

use serde::Serialize;

use super::shipping::FieldError;

/// Why a checkout attempt was turned away before reaching the order
/// processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The cart had no lines.
    EmptyCart,
    /// Shipping details failed validation.
    InvalidShippingDetails,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCart => f.write_str("empty cart"),
            Self::InvalidShippingDetails => f.write_str("invalid shipping details"),
        }
    }
}

/// Terminal state of one checkout attempt.
///
/// An attempt starts out awaiting submission and ends either rejected,
/// leaving the cart untouched, or confirmed, after which the cart is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was not submitted; the customer can correct and retry.
    Rejected {
        /// What blocked submission.
        reason: RejectionReason,
        /// Offending shipping fields, empty for an empty cart.
        field_errors: Vec<FieldError>,
    },
    /// The order processor accepted the order.
    Confirmed,
}

impl CheckoutOutcome {
    /// Whether the order went through.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}
