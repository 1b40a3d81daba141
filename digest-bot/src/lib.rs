//! # digest-bot
//!
//! Telegram surface for the crypto-news digest pipeline: slash commands, inline menu
//! buttons, and the scheduled daily digest. Wires news-client, news-format, and
//! news-digest together; loads config from env and runs the teloxide dispatcher.

pub mod commands;
pub mod config;
pub mod delivery;
pub mod keyboard;
pub mod runner;
pub mod scheduler;

pub use commands::{BotContext, Command};
pub use config::BotConfig;
pub use delivery::TelegramDelivery;
pub use runner::run_bot;
pub use scheduler::{next_run_after, spawn_daily_digest};
