//! # news-core
//!
//! Core types and traits for the crypto-news digest pipeline: [`Article`], [`TrendingTopic`],
//! [`AnalysisSummary`], the response envelopes, [`Subscriber`], the [`NewsApi`] and
//! [`DigestDelivery`] trait seams, the error taxonomy, and tracing initialization.
//! Transport-agnostic; used by news-client, news-format, news-digest, and digest-bot.

pub mod api;
pub mod delivery;
pub mod error;
pub mod logger;
pub mod types;

pub use api::{ArticleEndpoint, NewsApi};
pub use delivery::DigestDelivery;
pub use error::{DeliveryError, FetchError, NewsError, RegistryError, Result};
pub use logger::init_tracing;
pub use types::{
    AnalysisSummary, AnalyzeResponse, Article, NewsResponse, Sentiment, SentimentBreakdown,
    Subscriber, TrendingResponse, TrendingTopic,
};
