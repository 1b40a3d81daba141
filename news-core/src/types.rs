//! Core types: articles, trending topics, sentiment analysis, response envelopes, and subscribers.
//!
//! Every optional field decodes with `#[serde(default)]` so a missing or null field never fails
//! the envelope decode; display fallbacks for missing fields live in news-format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One news item as returned by the API. Immutable once decoded; only rendered, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub time_ago: Option<String>,
}

/// Aggregate sentiment of a topic or of the whole market.
///
/// Deserializes from the API strings `"bullish"` / `"bearish"`; anything else (including an
/// absent field) maps to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Parses the API sentiment string; unrecognized values map to `Neutral`.
    pub fn parse(s: &str) -> Self {
        match s {
            "bullish" => Sentiment::Bullish,
            "bearish" => Sentiment::Bearish,
            _ => Sentiment::Neutral,
        }
    }

    /// Colored marker used in front of topics and sentiment lines.
    pub fn glyph(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "🟢",
            Sentiment::Bearish => "🔴",
            Sentiment::Neutral => "⚪",
        }
    }

    /// Lowercase label as used by the API.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Bearish => "bearish",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Sentiment::parse(&s))
    }
}

/// One aggregated trending topic with its mention count over the analysis window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub sentiment: Sentiment,
}

/// Per-sentiment article counts inside an [`AnalysisSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    #[serde(default)]
    pub bullish: u32,
    #[serde(default)]
    pub bearish: u32,
    #[serde(default)]
    pub neutral: u32,
}

/// Aggregate market sentiment over the analyzed articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    #[serde(default)]
    pub overall_sentiment: Sentiment,
    #[serde(default)]
    pub sentiment_breakdown: SentimentBreakdown,
    #[serde(default)]
    pub articles_analyzed: u32,
}

/// Envelope for the article endpoints. Article order is relevance/recency as returned by the
/// API and is preserved, never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Envelope for `/api/trending`. Topics arrive ordered by descending mention count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingResponse {
    #[serde(default)]
    pub trending: Vec<TrendingTopic>,
    #[serde(default)]
    pub articles_analyzed: u32,
}

/// Envelope for `/api/analyze`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub analysis: Option<AnalysisSummary>,
}

/// One registered recipient of the scheduled daily digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Unique subscriber key.
    pub user_id: i64,
    /// Chat the digest is delivered to.
    pub chat_id: i64,
    pub subscribed_at: DateTime<Utc>,
    /// Reserved for per-user scheduling; always "UTC" today and never consulted.
    pub timezone: String,
}

impl Subscriber {
    /// Creates a subscriber stamped with the current time and the reserved "UTC" timezone.
    pub fn new(user_id: i64, chat_id: i64) -> Self {
        Self {
            user_id,
            chat_id,
            subscribed_at: Utc::now(),
            timezone: "UTC".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_parse_known_values() {
        assert_eq!(Sentiment::parse("bullish"), Sentiment::Bullish);
        assert_eq!(Sentiment::parse("bearish"), Sentiment::Bearish);
        assert_eq!(Sentiment::parse("neutral"), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_parse_unrecognized_falls_back_to_neutral() {
        assert_eq!(Sentiment::parse(""), Sentiment::Neutral);
        assert_eq!(Sentiment::parse("BULLISH"), Sentiment::Neutral);
        assert_eq!(Sentiment::parse("mixed"), Sentiment::Neutral);
    }

    #[test]
    fn test_article_decodes_with_missing_fields() {
        let article: Article = serde_json::from_str(r#"{"title": "BTC hits new high"}"#).unwrap();
        assert_eq!(article.title.as_deref(), Some("BTC hits new high"));
        assert!(article.source.is_none());
        assert!(article.link.is_none());
        assert!(article.time_ago.is_none());
    }

    #[test]
    fn test_article_decodes_camel_case_time_ago() {
        let article: Article =
            serde_json::from_str(r#"{"title": "t", "timeAgo": "2h ago"}"#).unwrap();
        assert_eq!(article.time_ago.as_deref(), Some("2h ago"));
    }

    #[test]
    fn test_trending_topic_sentiment_defaults_to_neutral() {
        let topic: TrendingTopic =
            serde_json::from_str(r#"{"topic": "Ethereum", "count": 12}"#).unwrap();
        assert_eq!(topic.sentiment, Sentiment::Neutral);

        let topic: TrendingTopic =
            serde_json::from_str(r#"{"topic": "Ethereum", "count": 12, "sentiment": "odd"}"#)
                .unwrap();
        assert_eq!(topic.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_analyze_response_decodes_full_payload() {
        let json = r#"{
            "analysis": {
                "overallSentiment": "bullish",
                "sentimentBreakdown": {"bullish": 7, "bearish": 2, "neutral": 1},
                "articlesAnalyzed": 10
            }
        }"#;
        let resp: AnalyzeResponse = serde_json::from_str(json).unwrap();
        let analysis = resp.analysis.unwrap();
        assert_eq!(analysis.overall_sentiment, Sentiment::Bullish);
        assert_eq!(analysis.sentiment_breakdown.bullish, 7);
        assert_eq!(analysis.articles_analyzed, 10);
    }

    #[test]
    fn test_empty_envelopes_decode() {
        let news: NewsResponse = serde_json::from_str("{}").unwrap();
        assert!(news.articles.is_empty());
        let trending: TrendingResponse = serde_json::from_str("{}").unwrap();
        assert!(trending.trending.is_empty());
        let analyze: AnalyzeResponse = serde_json::from_str("{}").unwrap();
        assert!(analyze.analysis.is_none());
    }

    #[test]
    fn test_subscriber_new_uses_utc_placeholder_timezone() {
        let sub = Subscriber::new(42, 100);
        assert_eq!(sub.user_id, 42);
        assert_eq!(sub.chat_id, 100);
        assert_eq!(sub.timezone, "UTC");
    }
}
