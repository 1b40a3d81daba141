//! # news-client
//!
//! Reqwest-based client for the crypto-news REST API. Implements [`news_core::NewsApi`]:
//! one GET per call, typed envelope decode, and every failure surfaced as a
//! [`FetchError`] value (network, HTTP status, or decode) — nothing panics across the
//! boundary. No retries, no caching, transport-default timeout.

use async_trait::async_trait;
use news_core::{
    AnalyzeResponse, ArticleEndpoint, FetchError, NewsApi, NewsResponse, TrendingResponse,
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Public instance of the free crypto-news API.
pub const DEFAULT_API_BASE: &str = "https://free-crypto-news.vercel.app";

/// HTTP client for the news API. Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NewsClient {
    /// Creates a client against the given API base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET against `{base}{path}` with the given query pairs, decoded into `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "fetching news endpoint");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[async_trait]
impl NewsApi for NewsClient {
    async fn fetch_articles(
        &self,
        endpoint: ArticleEndpoint,
        limit: u32,
    ) -> Result<NewsResponse, FetchError> {
        self.get_json(endpoint.path(), &[("limit", limit.to_string())])
            .await
    }

    async fn search_articles(&self, query: &str, limit: u32) -> Result<NewsResponse, FetchError> {
        self.get_json(
            "/api/search",
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn fetch_trending(&self, limit: u32) -> Result<TrendingResponse, FetchError> {
        self.get_json("/api/trending", &[("limit", limit.to_string())])
            .await
    }

    async fn fetch_analysis(&self, limit: u32) -> Result<AnalyzeResponse, FetchError> {
        self.get_json("/api/analyze", &[("limit", limit.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_uses_public_base() {
        let client = NewsClient::default();
        assert_eq!(client.base_url(), DEFAULT_API_BASE);
    }
}
