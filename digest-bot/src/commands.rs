//! Command and callback handlers. Every interactive trigger produces a response: success
//! text, the empty-result placeholder, or an explicit failure message — never silence.
//! Menu buttons are alternate entry points into the same handlers as the slash commands.

use chrono::Utc;
use news_core::{ArticleEndpoint, NewsApi};
use news_digest::{DigestComposer, SubscribeOutcome, SubscriberStore, UnsubscribeOutcome};
use news_format::{escape_markdown_v2, render_article, render_block, render_topic, TextMode};
use std::sync::Arc;
use teloxide::payloads::{EditMessageTextSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};
use teloxide::utils::command::BotCommands;
use tracing::warn;

use crate::delivery::no_preview;
use crate::keyboard::{callback, main_menu};

const NEWS_LIMIT: usize = 5;
const TRENDING_LIMIT: usize = 10;

const FETCH_FAILED_TEXT: &str = "❌ Failed to fetch news. Try again later.";

const WELCOME_TEXT: &str = "\
🚀 *Welcome to Crypto News Bot\\!*\n\
\n\
Get real\\-time crypto news from 7 major sources:\n\
• CoinDesk • The Block • Decrypt\n\
• CoinTelegraph • Bitcoin Magazine\n\
• Blockworks • The Defiant\n\
\n\
*Commands:*\n\
/news \\- Latest news\n\
/bitcoin \\- Bitcoin news\n\
/defi \\- DeFi news\n\
/breaking \\- Breaking \\(last 2h\\)\n\
/trending \\- Trending topics\n\
/digest \\- Full analysis digest\n\
/subscribe \\- Daily digest\n\
/unsubscribe \\- Stop daily digest\n\
\n\
Choose an option below or type a command:";

const SUBSCRIBED_TEXT: &str = "🔔 *Subscribed to Daily Digest\\!*\n\
\n\
You'll receive a news digest every day at 9:00 AM UTC\\.\n\
Use /unsubscribe to stop receiving digests\\.";

const ALREADY_SUBSCRIBED_TEXT: &str = "✅ You're already subscribed to daily digests\\!\n\
Use /unsubscribe to stop receiving them\\.";

const UNSUBSCRIBED_TEXT: &str = "🔕 Unsubscribed from daily digests\\.";

const NOT_SUBSCRIBED_TEXT: &str = "You're not subscribed to daily digests\\.";

/// Slash commands; each maps 1:1 onto a formatter/composer call.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Crypto news bot commands:")]
pub enum Command {
    #[command(description = "show the welcome menu")]
    Start,
    #[command(description = "show the welcome menu")]
    Help,
    #[command(description = "latest crypto news")]
    News,
    #[command(description = "Bitcoin news")]
    Bitcoin,
    #[command(description = "DeFi news")]
    Defi,
    #[command(description = "breaking news from the last 2 hours")]
    Breaking,
    #[command(description = "trending topics")]
    Trending,
    #[command(description = "full digest with analysis")]
    Digest,
    #[command(description = "subscribe to the daily digest")]
    Subscribe,
    #[command(description = "unsubscribe from the daily digest")]
    Unsubscribe,
}

/// Shared collaborators injected into every handler.
pub struct BotContext {
    pub client: Arc<dyn NewsApi>,
    pub composer: DigestComposer,
    pub store: Arc<dyn SubscriberStore>,
}

/// Dispatch endpoint for slash commands.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<BotContext>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    match cmd {
        Command::Start | Command::Help => send_welcome(&bot, chat_id).await,
        Command::News => {
            send_news_section(&bot, chat_id, &ctx, ArticleEndpoint::News, "📰 Latest Crypto News")
                .await
        }
        Command::Bitcoin => {
            send_news_section(&bot, chat_id, &ctx, ArticleEndpoint::Bitcoin, "₿ Bitcoin News")
                .await
        }
        Command::Defi => {
            send_news_section(&bot, chat_id, &ctx, ArticleEndpoint::Defi, "🏦 DeFi News").await
        }
        Command::Breaking => {
            send_news_section(&bot, chat_id, &ctx, ArticleEndpoint::Breaking, "🔥 Breaking News")
                .await
        }
        Command::Trending => send_trending(&bot, chat_id, &ctx).await,
        Command::Digest => send_digest(&bot, chat_id, &ctx).await,
        Command::Subscribe => {
            let Some(user) = msg.from.as_ref() else {
                return Ok(());
            };
            subscribe_user(&bot, chat_id, user.id.0 as i64, &ctx).await
        }
        Command::Unsubscribe => {
            let Some(user) = msg.from.as_ref() else {
                return Ok(());
            };
            unsubscribe_user(&bot, chat_id, user.id.0 as i64, &ctx).await
        }
    }
}

/// Dispatch endpoint for inline-menu button presses.
pub async fn handle_callback(bot: Bot, q: CallbackQuery, ctx: Arc<BotContext>) -> ResponseResult<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.clone() else {
        return Ok(());
    };
    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    let chat_id = message.chat().id;

    match data.as_str() {
        callback::NEWS => {
            send_news_section(&bot, chat_id, &ctx, ArticleEndpoint::News, "📰 Latest Crypto News")
                .await
        }
        callback::BITCOIN => {
            send_news_section(&bot, chat_id, &ctx, ArticleEndpoint::Bitcoin, "₿ Bitcoin News")
                .await
        }
        callback::DEFI => {
            send_news_section(&bot, chat_id, &ctx, ArticleEndpoint::Defi, "🏦 DeFi News").await
        }
        callback::BREAKING => {
            send_news_section(&bot, chat_id, &ctx, ArticleEndpoint::Breaking, "🔥 Breaking News")
                .await
        }
        callback::TRENDING => send_trending(&bot, chat_id, &ctx).await,
        callback::DIGEST => send_digest(&bot, chat_id, &ctx).await,
        callback::SUBSCRIBE => subscribe_user(&bot, chat_id, q.from.id.0 as i64, &ctx).await,
        _ => Ok(()),
    }
}

async fn send_welcome(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, WELCOME_TEXT)
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(main_menu())
        .await?;
    Ok(())
}

/// Generic article-section sender: loading message first, then edited in place with the
/// rendered block or the failure text.
async fn send_news_section(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &BotContext,
    endpoint: ArticleEndpoint,
    title: &str,
) -> ResponseResult<()> {
    let loading = bot.send_message(chat_id, "⏳ Fetching news...").await?;

    match ctx.client.fetch_articles(endpoint, NEWS_LIMIT as u32).await {
        Ok(resp) => {
            let articles: Vec<_> = resp.articles.into_iter().take(NEWS_LIMIT).collect();
            let block = render_block(
                &format!("*{}*", escape_markdown_v2(title)),
                &articles,
                |i, article| render_article(article, Some(i + 1), TextMode::MarkdownV2),
            );
            let text = format!("{}\n\n_Updated: {} UTC_", block, Utc::now().format("%H:%M"));
            bot.edit_message_text(chat_id, loading.id, text)
                .parse_mode(ParseMode::MarkdownV2)
                .link_preview_options(no_preview())
                .await?;
        }
        Err(e) => {
            warn!(error = %e, endpoint = ?endpoint, "interactive news fetch failed");
            bot.edit_message_text(chat_id, loading.id, FETCH_FAILED_TEXT)
                .await?;
        }
    }
    Ok(())
}

async fn send_trending(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let loading = bot.send_message(chat_id, "⏳ Analyzing trends...").await?;

    match ctx.client.fetch_trending(TRENDING_LIMIT as u32).await {
        Ok(resp) => {
            let analyzed = resp.articles_analyzed;
            let topics: Vec<_> = resp.trending.into_iter().take(TRENDING_LIMIT).collect();
            let block = render_block(
                "*📊 Trending Crypto Topics \\(24h\\)*",
                &topics,
                |i, topic| render_topic(topic, i + 1),
            );
            let text = format!("{}\n\n_Analyzed {} articles_", block, analyzed);
            bot.edit_message_text(chat_id, loading.id, text)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Err(e) => {
            warn!(error = %e, "interactive trending fetch failed");
            bot.edit_message_text(chat_id, loading.id, FETCH_FAILED_TEXT)
                .await?;
        }
    }
    Ok(())
}

async fn send_digest(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let loading = bot
        .send_message(chat_id, "⏳ Generating digest... This may take a moment.")
        .await?;

    // Composition degrades per section; it never fails outright.
    let text = ctx.composer.compose_digest().await;
    bot.edit_message_text(chat_id, loading.id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .link_preview_options(no_preview())
        .await?;
    Ok(())
}

async fn subscribe_user(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    ctx: &BotContext,
) -> ResponseResult<()> {
    match ctx.store.subscribe(user_id, chat_id.0).await {
        Ok(SubscribeOutcome::Created) => {
            bot.send_message(chat_id, SUBSCRIBED_TEXT)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Ok(SubscribeOutcome::AlreadySubscribed) => {
            bot.send_message(chat_id, ALREADY_SUBSCRIBED_TEXT)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Err(e) => {
            warn!(error = %e, user_id, "subscribe failed");
            bot.send_message(chat_id, FETCH_FAILED_TEXT).await?;
        }
    }
    Ok(())
}

async fn unsubscribe_user(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    ctx: &BotContext,
) -> ResponseResult<()> {
    match ctx.store.unsubscribe(user_id).await {
        Ok(UnsubscribeOutcome::Removed) => {
            bot.send_message(chat_id, UNSUBSCRIBED_TEXT)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Ok(UnsubscribeOutcome::NotSubscribed) => {
            bot.send_message(chat_id, NOT_SUBSCRIBED_TEXT)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Err(e) => {
            warn!(error = %e, user_id, "unsubscribe failed");
            bot.send_message(chat_id, FETCH_FAILED_TEXT).await?;
        }
    }
    Ok(())
}
