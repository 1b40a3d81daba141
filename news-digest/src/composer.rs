//! Digest composition: three concurrent fetches assembled into one MarkdownV2 document.
//!
//! Partial-failure policy: a failed fetch degrades its section to omitted (logged), never
//! the whole digest — the caller always receives whatever succeeded. Section order is fixed
//! regardless of fetch completion order.

use chrono::Utc;
use news_core::{ArticleEndpoint, NewsApi};
use news_format::{
    escape_markdown_v2, render_article, render_sentiment, render_topic_row, TextMode,
};
use std::sync::Arc;
use tracing::{instrument, warn};

const HEADLINE_LIMIT: usize = 5;
const TRENDING_LIMIT: usize = 5;
const ANALYSIS_LIMIT: u32 = 10;

/// Composes digest documents from independent [`NewsApi`] fetches.
#[derive(Clone)]
pub struct DigestComposer {
    client: Arc<dyn NewsApi>,
}

impl DigestComposer {
    pub fn new(client: Arc<dyn NewsApi>) -> Self {
        Self { client }
    }

    /// Composes the on-demand digest: date header, market-sentiment line, top trending
    /// topics, top headlines, footer attribution — in that fixed order.
    #[instrument(skip(self))]
    pub async fn compose_digest(&self) -> String {
        let (news, trending, analysis) = tokio::join!(
            self.client
                .fetch_articles(ArticleEndpoint::News, HEADLINE_LIMIT as u32),
            self.client.fetch_trending(TRENDING_LIMIT as u32),
            self.client.fetch_analysis(ANALYSIS_LIMIT),
        );

        let mut text = String::from("📋 *CRYPTO NEWS DIGEST*\n");
        let date = Utc::now().format("%B %d, %Y").to_string();
        text.push_str(&format!("_{}_\n\n", escape_markdown_v2(&date)));

        match analysis {
            Ok(resp) => {
                if let Some(summary) = resp.analysis {
                    let breakdown = summary.sentiment_breakdown;
                    text.push_str(&format!(
                        "*Market Sentiment:* {}\n",
                        render_sentiment(summary.overall_sentiment)
                    ));
                    text.push_str(&format!(
                        "Bullish: {} \\| Bearish: {} \\| Neutral: {}\n\n",
                        breakdown.bullish, breakdown.bearish, breakdown.neutral
                    ));
                }
            }
            Err(e) => warn!(error = %e, "analysis fetch failed, omitting sentiment section"),
        }

        match trending {
            Ok(resp) if !resp.trending.is_empty() => {
                text.push_str("*🔥 Top Trending:*\n");
                for topic in resp.trending.iter().take(TRENDING_LIMIT) {
                    text.push_str(&render_topic_row(topic));
                    text.push('\n');
                }
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "trending fetch failed, omitting trending section"),
        }

        match news {
            Ok(resp) if !resp.articles.is_empty() => {
                text.push_str("*📰 Top Headlines:*\n\n");
                for (i, article) in resp.articles.iter().take(HEADLINE_LIMIT).enumerate() {
                    text.push_str(&render_article(article, Some(i + 1), TextMode::MarkdownV2));
                    text.push_str("\n\n");
                }
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "news fetch failed, omitting headlines section"),
        }

        text.push_str("_Powered by Free Crypto News API_");
        text
    }

    /// Composes the scheduled-morning variant: greeting header, trending topics without
    /// counts, headlines, sign-off footer. Same degradation policy as [`Self::compose_digest`].
    #[instrument(skip(self))]
    pub async fn compose_morning_digest(&self) -> String {
        let (news, trending) = tokio::join!(
            self.client
                .fetch_articles(ArticleEndpoint::News, HEADLINE_LIMIT as u32),
            self.client.fetch_trending(TRENDING_LIMIT as u32),
        );

        let mut text = String::from("🌅 *GOOD MORNING\\! Your Daily Crypto Digest*\n\n");

        match trending {
            Ok(resp) if !resp.trending.is_empty() => {
                text.push_str("*🔥 Today's Hot Topics:*\n");
                for topic in resp.trending.iter().take(TRENDING_LIMIT) {
                    text.push_str(&format!(
                        "  {} {}\n",
                        topic.sentiment.glyph(),
                        escape_markdown_v2(news_format::topic_name(topic))
                    ));
                }
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "trending fetch failed, omitting hot topics section"),
        }

        match news {
            Ok(resp) if !resp.articles.is_empty() => {
                text.push_str("*📰 Headlines:*\n\n");
                for (i, article) in resp.articles.iter().take(HEADLINE_LIMIT).enumerate() {
                    text.push_str(&render_article(article, Some(i + 1), TextMode::MarkdownV2));
                    text.push_str("\n\n");
                }
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "news fetch failed, omitting headlines section"),
        }

        text.push_str("_Have a great day\\! 🚀_");
        text
    }
}
