//! Notification dispatchers: log output and pickup-directory files.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::notification::{NotificationDispatcher, OrderNotification};
use crate::domain::order_processor::OrderProcessingError;

/// Emits each notification as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDispatcher;

#[async_trait]
impl NotificationDispatcher for LogDispatcher {
    async fn dispatch(&self, notification: &OrderNotification) -> Result<(), OrderProcessingError> {
        info!(
            to = %notification.to,
            from = %notification.from,
            subject = %notification.subject,
            body = %notification.body,
            "order notification"
        );
        Ok(())
    }
}

/// Writes each notification as an `.eml` file into a pickup directory.
#[derive(Debug, Clone)]
pub struct FileDispatcher {
    directory: PathBuf,
}

impl FileDispatcher {
    /// Creates a dispatcher writing into `directory`, which is created on
    /// first use if missing.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl NotificationDispatcher for FileDispatcher {
    async fn dispatch(&self, notification: &OrderNotification) -> Result<(), OrderProcessingError> {
        tokio::fs::create_dir_all(&self.directory).await?;

        let file_name = format!(
            "{}-{}.eml",
            notification.created_at.format("%Y%m%dT%H%M%SZ"),
            Uuid::new_v4()
        );
        let path = self.directory.join(file_name);
        tokio::fs::write(&path, notification.to_message()).await?;

        info!(path = %path.display(), "order notification written");
        Ok(())
    }
}
