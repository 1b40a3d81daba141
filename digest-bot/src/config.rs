//! Bot configuration: token, API base override, log path.
//! Loaded from environment variables BOT_TOKEN, NEWS_API_BASE, LOG_FILE.

use anyhow::Result;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/digest-bot.log";

/// Minimal bot configuration (Telegram access, API base, logging).
pub struct BotConfig {
    /// Required at startup; absence is a fatal configuration error.
    pub bot_token: String,
    /// Override for the fixed news API base; `None` means the public default.
    pub api_base: Option<String>,
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env: BOT_TOKEN required, NEWS_API_BASE and LOG_FILE optional.
    /// A `token` argument (e.g. from the CLI) takes precedence over BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let api_base = env::var("NEWS_API_BASE").ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            bot_token,
            api_base,
            log_file,
        })
    }

    /// Constructs with the given token and defaults for everything else.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            api_base: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
