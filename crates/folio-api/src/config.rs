//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use folio_cart::domain::order_processor::OrderProcessor;
use folio_cart::infrastructure::dispatchers::{FileDispatcher, LogDispatcher};
use folio_cart::infrastructure::notification::{
    NotificationDispatcher, NotificationOrderProcessor, NotificationSettings,
};
use folio_core::clock::Clock;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAIL_TO: &str = "orders@folio.example";
const DEFAULT_MAIL_FROM: &str = "store@folio.example";
const DEFAULT_FILE_LOCATION: &str = "./orders";
const DEFAULT_CART_IDLE_TIMEOUT_SECS: u64 = 30 * 60;
const MAX_CART_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Addresses used on order notifications.
    pub notification: NotificationSettings,
    /// Write order notifications to files instead of the log.
    pub write_as_file: bool,
    /// Pickup directory for file notifications.
    pub file_location: PathBuf,
    /// Carts unused for this long are discarded.
    pub cart_idle_timeout: Duration,
}

impl ApiConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a
    /// variable or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`,
    /// `ORDER_WRITE_AS_FILE` is not a boolean, or `CART_IDLE_TIMEOUT_SECS` is
    /// not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let write_as_file = match lookup("ORDER_WRITE_AS_FILE") {
            Some(raw) => raw.trim().to_ascii_lowercase().parse::<bool>().map_err(|e| {
                AppError::Config(format!("ORDER_WRITE_AS_FILE must be true or false: {e}"))
            })?,
            None => false,
        };
        let cart_idle_timeout = match lookup("CART_IDLE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(AppError::Config(format!(
                        "CART_IDLE_TIMEOUT_SECS must be a positive number of seconds, got {raw:?}"
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_CART_IDLE_TIMEOUT_SECS),
        };

        Ok(Self {
            host,
            port,
            notification: NotificationSettings {
                mail_to: lookup("ORDER_MAIL_TO").unwrap_or_else(|| DEFAULT_MAIL_TO.to_owned()),
                mail_from: lookup("ORDER_MAIL_FROM")
                    .unwrap_or_else(|| DEFAULT_MAIL_FROM.to_owned()),
            },
            write_as_file,
            file_location: lookup("ORDER_FILE_LOCATION")
                .map_or_else(|| PathBuf::from(DEFAULT_FILE_LOCATION), PathBuf::from),
            cart_idle_timeout,
        })
    }

    /// How often idle carts are swept: the idle timeout, capped at one
    /// minute.
    #[must_use]
    pub fn cart_sweep_interval(&self) -> Duration {
        self.cart_idle_timeout.min(MAX_CART_SWEEP_INTERVAL)
    }

    /// The socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a valid address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Builds the order processor these settings describe.
    #[must_use]
    pub fn order_processor(&self, clock: Arc<dyn Clock>) -> Arc<dyn OrderProcessor> {
        let dispatcher: Arc<dyn NotificationDispatcher> = if self.write_as_file {
            Arc::new(FileDispatcher::new(&self.file_location))
        } else {
            Arc::new(LogDispatcher)
        };
        Arc::new(NotificationOrderProcessor::new(
            self.notification.clone(),
            clock,
            dispatcher,
        ))
    }
}
