//! News API contract: the fixed endpoint set and the [`NewsApi`] trait implemented by
//! news-client and by test stubs.

use crate::error::FetchError;
use crate::types::{AnalyzeResponse, NewsResponse, TrendingResponse};
use async_trait::async_trait;

/// Article-returning endpoints of the news API. Search, trending, and analyze have their own
/// methods on [`NewsApi`] because their responses carry different envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleEndpoint {
    News,
    Defi,
    Bitcoin,
    Breaking,
}

impl ArticleEndpoint {
    /// URL path under the API base, e.g. `/api/news`.
    pub fn path(&self) -> &'static str {
        match self {
            ArticleEndpoint::News => "/api/news",
            ArticleEndpoint::Defi => "/api/defi",
            ArticleEndpoint::Bitcoin => "/api/bitcoin",
            ArticleEndpoint::Breaking => "/api/breaking",
        }
    }
}

/// One HTTP GET per call; no retries, no caching, no local state between calls. `limit` bounds
/// the number of records requested and is passed through as a query parameter.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Fetches articles from one of the article endpoints.
    async fn fetch_articles(
        &self,
        endpoint: ArticleEndpoint,
        limit: u32,
    ) -> Result<NewsResponse, FetchError>;

    /// Searches articles by comma-separated keywords via `/api/search`.
    async fn search_articles(&self, query: &str, limit: u32) -> Result<NewsResponse, FetchError>;

    /// Fetches trending topics via `/api/trending`.
    async fn fetch_trending(&self, limit: u32) -> Result<TrendingResponse, FetchError>;

    /// Fetches the aggregate sentiment analysis via `/api/analyze`.
    async fn fetch_analysis(&self, limit: u32) -> Result<AnalyzeResponse, FetchError>;
}
