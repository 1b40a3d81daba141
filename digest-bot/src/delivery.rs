//! Teloxide-backed implementation of [`DigestDelivery`] used by the scheduled fan-out.

use async_trait::async_trait;
use news_core::{DeliveryError, DigestDelivery};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::Requester;
use teloxide::types::{ChatId, LinkPreviewOptions, ParseMode};

/// Sends composed digests through the Telegram Bot API (MarkdownV2, previews disabled).
pub struct TelegramDelivery {
    bot: teloxide::Bot,
}

impl TelegramDelivery {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Disables the web-page preview so multi-link digests stay compact.
pub fn no_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

#[async_trait]
impl DigestDelivery for TelegramDelivery {
    async fn send_digest(&self, chat_id: i64, text: &str) -> Result<(), DeliveryError> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .link_preview_options(no_preview())
            .await
            .map_err(|e| DeliveryError {
                chat_id,
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
