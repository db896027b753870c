//! Outbound chat notifications.

pub mod telegram;

use async_trait::async_trait;

use homework_common::error::SendError;

pub use telegram::TelegramNotifier;

/// Capability to deliver a text message to the configured destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short name of the delivery channel (e.g. "telegram").
    fn type_name(&self) -> &str;

    /// Send `text` to the configured destination.
    async fn send_text(&self, text: &str) -> Result<(), SendError>;
}
