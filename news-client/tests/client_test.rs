//! Integration tests for NewsClient against a mockito server: envelope decode, query
//! parameters, and the three FetchError kinds.

use mockito::Matcher;
use news_client::NewsClient;
use news_core::{ArticleEndpoint, FetchError, NewsApi, Sentiment};

#[tokio::test]
async fn test_fetch_articles_decodes_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/news")
        .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "articles": [
                    {"title": "BTC rallies", "source": "CoinDesk", "link": "https://x/a", "timeAgo": "1h ago"},
                    {"title": "ETH upgrade"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = NewsClient::new(server.url());
    let resp = client
        .fetch_articles(ArticleEndpoint::News, 5)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.articles.len(), 2);
    assert_eq!(resp.articles[0].title.as_deref(), Some("BTC rallies"));
    assert_eq!(resp.articles[0].time_ago.as_deref(), Some("1h ago"));
    assert!(resp.articles[1].source.is_none());
}

#[tokio::test]
async fn test_search_articles_passes_query_keywords() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "bitcoin,etf".into()),
            Matcher::UrlEncoded("limit".into(), "3".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"articles": []}"#)
        .create_async()
        .await;

    let client = NewsClient::new(server.url());
    let resp = client.search_articles("bitcoin,etf", 3).await.unwrap();

    mock.assert_async().await;
    assert!(resp.articles.is_empty());
}

#[tokio::test]
async fn test_fetch_trending_decodes_topics() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/trending")
        .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "trending": [
                    {"topic": "Bitcoin", "count": 14, "sentiment": "bullish"},
                    {"topic": "Solana", "count": 6}
                ],
                "articlesAnalyzed": 40
            }"#,
        )
        .create_async()
        .await;

    let client = NewsClient::new(server.url());
    let resp = client.fetch_trending(5).await.unwrap();

    assert_eq!(resp.trending.len(), 2);
    assert_eq!(resp.trending[0].sentiment, Sentiment::Bullish);
    assert_eq!(resp.trending[1].sentiment, Sentiment::Neutral);
    assert_eq!(resp.articles_analyzed, 40);
}

#[tokio::test]
async fn test_fetch_analysis_decodes_summary() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/analyze")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "analysis": {
                    "overallSentiment": "bearish",
                    "sentimentBreakdown": {"bullish": 2, "bearish": 6, "neutral": 2},
                    "articlesAnalyzed": 10
                }
            }"#,
        )
        .create_async()
        .await;

    let client = NewsClient::new(server.url());
    let resp = client.fetch_analysis(10).await.unwrap();

    let analysis = resp.analysis.unwrap();
    assert_eq!(analysis.overall_sentiment, Sentiment::Bearish);
    assert_eq!(analysis.sentiment_breakdown.bearish, 6);
}

#[tokio::test]
async fn test_non_success_status_maps_to_http_status_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/news")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = NewsClient::new(server.url());
    let err = client
        .fetch_articles(ArticleEndpoint::News, 5)
        .await
        .unwrap_err();

    match err {
        FetchError::HttpStatus(status) => assert_eq!(status, 503),
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/trending")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let client = NewsClient::new(server.url());
    let err = client.fetch_trending(5).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_network_error() {
    // Nothing listens on this port.
    let client = NewsClient::new("http://127.0.0.1:9");
    let err = client
        .fetch_articles(ArticleEndpoint::Bitcoin, 5)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}
