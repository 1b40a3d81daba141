//! Bot entry: builds the client, registry, composer, and scheduler, then runs the
//! teloxide dispatcher until shutdown.

use anyhow::Result;
use news_client::NewsClient;
use news_core::{init_tracing, NewsApi};
use news_digest::{DigestComposer, InMemorySubscriberStore, ScheduledDigestJob};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, instrument};

use crate::commands::{handle_callback, handle_command, BotContext, Command};
use crate::config::BotConfig;
use crate::delivery::TelegramDelivery;
use crate::scheduler::spawn_daily_digest;

/// Main entry: init logging, wire components, spawn the daily scheduler, dispatch updates.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    std::fs::create_dir_all("logs")?;
    init_tracing(&config.log_file)?;

    let client: Arc<dyn NewsApi> = match &config.api_base {
        Some(base) => Arc::new(NewsClient::new(base.clone())),
        None => Arc::new(NewsClient::default()),
    };
    let store = Arc::new(InMemorySubscriberStore::new());
    let composer = DigestComposer::new(client.clone());

    let bot = Bot::new(config.bot_token.clone());

    let delivery = Arc::new(TelegramDelivery::new(bot.clone()));
    let job = Arc::new(ScheduledDigestJob::new(
        composer.clone(),
        store.clone(),
        delivery,
    ));
    spawn_daily_digest(job);

    let ctx = Arc::new(BotContext {
        client,
        composer,
        store,
    });

    info!("Bot started successfully");

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
