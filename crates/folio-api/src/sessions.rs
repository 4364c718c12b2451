//! Per-session cart storage.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use folio_cart::domain::cart::Cart;
use folio_core::clock::{Clock, SystemClock};
use folio_core::error::DomainError;
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

/// Shared handle to a single session's cart. Hold the lock for the whole
/// operation so add/remove/clear/checkout on one cart never interleave.
pub type SessionCart = Arc<Mutex<Cart>>;

#[derive(Debug)]
struct SessionEntry {
    cart: SessionCart,
    last_used: DateTime<Utc>,
}

/// Carts keyed by session identifier.
///
/// A session ends when it is removed or when it has not been used for longer
/// than the idle timeout passed to [`CartSessions::evict_idle`].
#[derive(Clone)]
pub struct CartSessions {
    carts: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    clock: Arc<dyn Clock>,
}

impl Default for CartSessions {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl fmt::Debug for CartSessions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartSessions").finish_non_exhaustive()
    }
}

impl CartSessions {
    /// Creates an empty store that reads idle time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            carts: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Opens a new empty cart and returns its identifier.
    pub async fn create(&self) -> Uuid {
        let cart_id = Uuid::new_v4();
        let entry = SessionEntry {
            cart: Arc::new(Mutex::new(Cart::new())),
            last_used: self.clock.now(),
        };
        self.carts.write().await.insert(cart_id, entry);
        cart_id
    }

    /// Looks up the cart for `cart_id` and marks the session as used.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no such cart is open.
    pub async fn get(&self, cart_id: Uuid) -> Result<SessionCart, DomainError> {
        let mut carts = self.carts.write().await;
        let entry = carts
            .get_mut(&cart_id)
            .ok_or(DomainError::NotFound(cart_id))?;
        entry.last_used = self.clock.now();
        Ok(Arc::clone(&entry.cart))
    }

    /// Ends the session for `cart_id`, discarding its cart.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no such cart is open.
    pub async fn remove(&self, cart_id: Uuid) -> Result<(), DomainError> {
        self.carts
            .write()
            .await
            .remove(&cart_id)
            .map(|_| ())
            .ok_or(DomainError::NotFound(cart_id))
    }

    /// Ends every session unused for longer than `max_idle` and returns how
    /// many were removed.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let max_idle = TimeDelta::from_std(max_idle).unwrap_or(TimeDelta::MAX);
        let Some(cutoff) = self.clock.now().checked_sub_signed(max_idle) else {
            return 0;
        };

        let mut carts = self.carts.write().await;
        let before = carts.len();
        carts.retain(|_, entry| entry.last_used >= cutoff);
        before - carts.len()
    }

    /// Evicts idle sessions every `sweep_every` until the task is dropped.
    pub async fn expire_idle(self, max_idle: Duration, sweep_every: Duration) {
        let mut ticker = tokio::time::interval(sweep_every);
        loop {
            ticker.tick().await;
            let evicted = self.evict_idle(max_idle).await;
            if evicted > 0 {
                info!(evicted, "idle carts expired");
            }
        }
    }

    /// Number of open sessions.
    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }

    /// Whether no session is open.
    pub async fn is_empty(&self) -> bool {
        self.carts.read().await.is_empty()
    }
}
