//! Mock `OrderProcessor` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use folio_cart::domain::cart::Cart;
use folio_cart::domain::order_processor::{OrderProcessingError, OrderProcessor};
use folio_cart::domain::shipping::ShippingDetails;

/// An order processor that records a copy of every order it receives and
/// always succeeds.
#[derive(Debug, Default)]
pub struct RecordingOrderProcessor {
    orders: Mutex<Vec<(Cart, ShippingDetails)>>,
}

impl RecordingOrderProcessor {
    /// Creates a processor with no recorded orders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all orders processed so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn orders(&self) -> Vec<(Cart, ShippingDetails)> {
        self.orders.lock().unwrap().clone()
    }

    /// Number of `process_order` calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }
}

#[async_trait]
impl OrderProcessor for RecordingOrderProcessor {
    async fn process_order(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<(), OrderProcessingError> {
        self.orders
            .lock()
            .unwrap()
            .push((cart.clone(), shipping.clone()));
        Ok(())
    }
}

/// An order processor that counts calls and always fails with a dispatch
/// error. Useful for checking that a failed submission keeps the cart.
#[derive(Debug, Default)]
pub struct FailingOrderProcessor {
    calls: Mutex<usize>,
}

impl FailingOrderProcessor {
    /// Creates a processor with a zero call count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `process_order` calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl OrderProcessor for FailingOrderProcessor {
    async fn process_order(
        &self,
        _cart: &Cart,
        _shipping: &ShippingDetails,
    ) -> Result<(), OrderProcessingError> {
        *self.calls.lock().unwrap() += 1;
        Err(OrderProcessingError::Dispatch("mail server unavailable".into()))
    }
}
