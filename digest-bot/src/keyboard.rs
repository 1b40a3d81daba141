//! Inline keyboard for the welcome menu. Button callback data routes into the same command
//! handlers as the slash commands.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Callback data values carried by the menu buttons.
pub mod callback {
    pub const NEWS: &str = "news";
    pub const BREAKING: &str = "breaking";
    pub const BITCOIN: &str = "bitcoin";
    pub const DEFI: &str = "defi";
    pub const TRENDING: &str = "trending";
    pub const DIGEST: &str = "digest";
    pub const SUBSCRIBE: &str = "subscribe";
}

/// Builds the welcome-menu keyboard.
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("📰 Latest News", callback::NEWS),
            InlineKeyboardButton::callback("🔥 Breaking", callback::BREAKING),
        ],
        vec![
            InlineKeyboardButton::callback("₿ Bitcoin", callback::BITCOIN),
            InlineKeyboardButton::callback("🏦 DeFi", callback::DEFI),
        ],
        vec![
            InlineKeyboardButton::callback("📊 Trending", callback::TRENDING),
            InlineKeyboardButton::callback("📋 Full Digest", callback::DIGEST),
        ],
        vec![InlineKeyboardButton::callback(
            "🔔 Subscribe Daily",
            callback::SUBSCRIBE,
        )],
    ])
}
