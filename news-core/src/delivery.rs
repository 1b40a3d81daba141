//! Delivery abstraction for sending a composed digest to a subscriber's chat.
//!
//! [`DigestDelivery`] is transport-agnostic; digest-bot implements it via teloxide and tests
//! substitute recording stubs.

use crate::error::DeliveryError;
use async_trait::async_trait;

/// Sends one rendered digest to one delivery target. Implementations map to a chat transport.
#[async_trait]
pub trait DigestDelivery: Send + Sync {
    /// Sends `text` (MarkdownV2) to the given chat. Errors are per-subscriber and non-fatal.
    async fn send_digest(&self, chat_id: i64, text: &str) -> Result<(), DeliveryError>;
}
