//! Order processor that announces each order as a notification message.

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::clock::Clock;

use crate::domain::cart::Cart;
use crate::domain::order_processor::{OrderProcessingError, OrderProcessor};
use crate::domain::shipping::ShippingDetails;

/// Subject line of every order notification.
pub const ORDER_SUBJECT: &str = "New order submitted!";

/// Addresses used on outgoing order notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    /// Recipient, usually the store's order desk.
    pub mail_to: String,
    /// Sender shown on the notification.
    pub mail_from: String,
}

/// A rendered order notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNotification {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// When the notification was composed.
    pub created_at: DateTime<Utc>,
}

impl OrderNotification {
    /// Renders the order in `cart` shipped to `shipping`.
    ///
    /// # Errors
    ///
    /// Returns `OrderProcessingError::InvalidOrder` if a cart total is not
    /// representable.
    pub fn compose(
        cart: &Cart,
        shipping: &ShippingDetails,
        settings: &NotificationSettings,
        created_at: DateTime<Utc>,
    ) -> Result<Self, OrderProcessingError> {
        let mut body = String::from("A new order has been submitted\n---\nItems:\n");
        for line in cart.lines() {
            let _ = writeln!(
                body,
                "{} x {} (subtotal: {})",
                line.quantity,
                line.book.name,
                line.line_total()?
            );
        }
        let _ = writeln!(
            body,
            "---\nTotal order value: {}\n---\nShip to:",
            cart.compute_total_value()?
        );
        let _ = writeln!(body, "{}", shipping.name.trim());
        let _ = writeln!(body, "{}", shipping.line1.trim());
        for line in shipping.extra_address_lines() {
            let _ = writeln!(body, "{line}");
        }
        let _ = writeln!(body, "{}", shipping.city.trim());
        let _ = writeln!(body, "{}", shipping.country.trim());
        let _ = write!(
            body,
            "---\nGift wrap: {}\n",
            if shipping.gift_wrap { "Yes" } else { "No" }
        );

        Ok(Self {
            from: settings.mail_from.clone(),
            to: settings.mail_to.clone(),
            subject: ORDER_SUBJECT.to_owned(),
            body,
            created_at,
        })
    }

    /// Headers followed by the body, in RFC 5322 layout.
    #[must_use]
    pub fn to_message(&self) -> String {
        format!(
            "From: {}\r\nTo: {}\r\nSubject: {}\r\nDate: {}\r\n\r\n{}",
            self.from,
            self.to,
            self.subject,
            self.created_at.to_rfc2822(),
            self.body.replace('\n', "\r\n"),
        )
    }
}

/// Delivers a rendered order notification somewhere.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Deliver `notification`.
    async fn dispatch(&self, notification: &OrderNotification) -> Result<(), OrderProcessingError>;
}

/// Order processor that composes an [`OrderNotification`] and hands it to a
/// [`NotificationDispatcher`].
pub struct NotificationOrderProcessor {
    settings: NotificationSettings,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl NotificationOrderProcessor {
    /// Creates a processor.
    #[must_use]
    pub fn new(
        settings: NotificationSettings,
        clock: Arc<dyn Clock>,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            settings,
            clock,
            dispatcher,
        }
    }
}

impl std::fmt::Debug for NotificationOrderProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationOrderProcessor")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OrderProcessor for NotificationOrderProcessor {
    async fn process_order(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<(), OrderProcessingError> {
        let notification =
            OrderNotification::compose(cart, shipping, &self.settings, self.clock.now())?;
        self.dispatcher.dispatch(&notification).await
    }
}
