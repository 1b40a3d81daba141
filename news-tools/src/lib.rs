//! # news-tools
//!
//! Callable tool functions for an LLM agent framework. Each tool wraps one News API
//! endpoint and returns plain text an agent can feed back to a model: a bulleted article
//! list on success, a short fallback sentence when nothing is available or the fetch fails.
//! Tool output is never an error value or a stack trace.

use news_core::{Article, ArticleEndpoint, NewsApi};
use news_format::{render_article, TextMode};
use std::sync::Arc;
use tracing::warn;

/// Agent-facing news tools over a shared [`NewsApi`] client.
#[derive(Clone)]
pub struct NewsTools {
    client: Arc<dyn NewsApi>,
}

impl NewsTools {
    pub fn new(client: Arc<dyn NewsApi>) -> Self {
        Self { client }
    }

    /// Latest crypto news from the aggregated sources.
    pub async fn latest_news(&self, limit: u32) -> String {
        self.article_tool(ArticleEndpoint::News, limit, "No news available.")
            .await
    }

    /// Keyword search across sources. `keywords` is comma-separated.
    pub async fn search_news(&self, keywords: &str, limit: u32) -> String {
        let fallback = format!("No news found for '{}'.", keywords);
        match self.client.search_articles(keywords, limit).await {
            Ok(resp) => bulleted(&resp.articles, &fallback),
            Err(e) => {
                warn!(error = %e, keywords, "search tool fetch failed");
                fallback
            }
        }
    }

    /// DeFi-specific news: yield farming, DEXs, protocols.
    pub async fn defi_news(&self, limit: u32) -> String {
        self.article_tool(ArticleEndpoint::Defi, limit, "No DeFi news available.")
            .await
    }

    /// Bitcoin-specific news: BTC, mining, Lightning Network.
    pub async fn bitcoin_news(&self, limit: u32) -> String {
        self.article_tool(ArticleEndpoint::Bitcoin, limit, "No Bitcoin news available.")
            .await
    }

    /// Breaking news from the last two hours.
    pub async fn breaking_news(&self, limit: u32) -> String {
        self.article_tool(
            ArticleEndpoint::Breaking,
            limit,
            "No breaking news in the last 2 hours.",
        )
        .await
    }

    async fn article_tool(
        &self,
        endpoint: ArticleEndpoint,
        limit: u32,
        fallback: &str,
    ) -> String {
        match self.client.fetch_articles(endpoint, limit).await {
            Ok(resp) => bulleted(&resp.articles, fallback),
            Err(e) => {
                warn!(error = %e, endpoint = ?endpoint, "news tool fetch failed");
                fallback.to_string()
            }
        }
    }
}

fn bulleted(articles: &[Article], fallback: &str) -> String {
    if articles.is_empty() {
        return fallback.to_string();
    }
    articles
        .iter()
        .map(|article| render_article(article, None, TextMode::Plain))
        .collect::<Vec<_>>()
        .join("\n")
}
