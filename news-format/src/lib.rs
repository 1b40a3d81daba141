//! # news-format
//!
//! Pure formatting for news articles, trending topics, and composed blocks. No I/O, fully
//! deterministic, total over its input domain: missing fields render as the documented
//! fallbacks and nothing here ever fails.
//!
//! This crate is the single source of truth for the display fallbacks ("No title",
//! "Unknown", empty link/time) and for MarkdownV2 escaping. Telegram's strict MarkdownV2
//! parser rejects any message with an unescaped special character, so escaping every
//! user-supplied field is mandatory for message delivery, not cosmetic.

use news_core::{Article, Sentiment, TrendingTopic};

/// Fallback shown when an article arrives without a title.
pub const FALLBACK_TITLE: &str = "No title";
/// Fallback shown when an article or topic arrives without a source/name.
pub const FALLBACK_SOURCE: &str = "Unknown";
/// Returned by [`render_block`] for an empty item sequence. Contractual text: callers must
/// not substitute a different fallback. Deliberately free of MarkdownV2 specials so it can
/// be sent in any mode without escaping.
pub const NO_DATA_PLACEHOLDER: &str = "No data available right now";

/// Output dialect for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Unmarked text for tool output and logs.
    Plain,
    /// Legacy Telegram Markdown (no escaping requirements worth honoring).
    Markdown,
    /// Telegram MarkdownV2; every user-supplied field must be escaped.
    MarkdownV2,
}

/// The fixed MarkdownV2 special-character set, per the Telegram Bot API.
const MARKDOWN_V2_SPECIALS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes MarkdownV2 special characters by prefixing each occurrence with a backslash.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_SPECIALS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Title with the documented fallback applied.
pub fn article_title(article: &Article) -> &str {
    article.title.as_deref().unwrap_or(FALLBACK_TITLE)
}

/// Source with the documented fallback applied.
pub fn article_source(article: &Article) -> &str {
    article.source.as_deref().unwrap_or(FALLBACK_SOURCE)
}

/// Link with the documented empty-string fallback applied.
pub fn article_link(article: &Article) -> &str {
    article.link.as_deref().unwrap_or("")
}

/// Relative time with the documented empty-string fallback applied.
pub fn article_time_ago(article: &Article) -> &str {
    article.time_ago.as_deref().unwrap_or("")
}

/// Topic name with the documented fallback applied.
pub fn topic_name(topic: &TrendingTopic) -> &str {
    topic.topic.as_deref().unwrap_or(FALLBACK_SOURCE)
}

/// Renders one article in the given mode.
///
/// `index` present means a numbered bullet (`"1. "`, escaped as `"1\."` in MarkdownV2);
/// absent means the default glyph prefix.
pub fn render_article(article: &Article, index: Option<usize>, mode: TextMode) -> String {
    let title = article_title(article);
    let source = article_source(article);
    let link = article_link(article);
    let time_ago = article_time_ago(article);

    match mode {
        TextMode::Plain => {
            let prefix = match index {
                Some(i) => format!("{}. ", i),
                None => "• ".to_string(),
            };
            let meta = if time_ago.is_empty() {
                format!("({})", source)
            } else {
                format!("({}, {})", source, time_ago)
            };
            format!("{}{} {}", prefix, title, meta)
        }
        TextMode::Markdown => {
            let prefix = match index {
                Some(i) => format!("{}. ", i),
                None => "• ".to_string(),
            };
            format!(
                "{}[{}]({})\n   _{} • {}_",
                prefix, title, link, source, time_ago
            )
        }
        TextMode::MarkdownV2 => {
            let prefix = match index {
                Some(i) => format!("{}\\. ", i),
                None => "📰 ".to_string(),
            };
            format!(
                "{}*{}*\n└ {} • {}\n🔗 [Read more]({})",
                prefix,
                escape_markdown_v2(title),
                escape_markdown_v2(source),
                escape_markdown_v2(time_ago),
                link
            )
        }
    }
}

/// Renders one trending topic as a numbered MarkdownV2 line: sentiment glyph, escaped topic
/// name, mention count, escaped sentiment label.
pub fn render_topic(topic: &TrendingTopic, index: usize) -> String {
    format!(
        "{}\\. {} *{}* \\- {} mentions \\({}\\)",
        index,
        topic.sentiment.glyph(),
        escape_markdown_v2(topic_name(topic)),
        topic.count,
        escape_markdown_v2(topic.sentiment.label()),
    )
}

/// Renders one trending topic as an indented digest row (glyph, name, count, no index).
pub fn render_topic_row(topic: &TrendingTopic) -> String {
    format!(
        "  {} {} \\({}\\)",
        topic.sentiment.glyph(),
        escape_markdown_v2(topic_name(topic)),
        topic.count,
    )
}

/// Glyph + uppercase label line fragment for an overall sentiment, MarkdownV2-escaped.
pub fn render_sentiment(sentiment: Sentiment) -> String {
    format!(
        "{} {}",
        sentiment.glyph(),
        escape_markdown_v2(&sentiment.label().to_uppercase())
    )
}

/// Joins a title line with rendered items in input order, separated by blank lines.
///
/// An empty item sequence returns [`NO_DATA_PLACEHOLDER`] alone, never a header with no body.
pub fn render_block<T, F>(title: &str, items: &[T], render_item: F) -> String
where
    F: Fn(usize, &T) -> String,
{
    if items.is_empty() {
        return NO_DATA_PLACEHOLDER.to_string();
    }
    let body = items
        .iter()
        .enumerate()
        .map(|(i, item)| render_item(i, item))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{}\n\n{}", title, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            source: Some("CoinDesk".to_string()),
            link: Some("https://example.com/a".to_string()),
            time_ago: Some("2h ago".to_string()),
        }
    }

    fn empty_article() -> Article {
        Article {
            title: None,
            source: None,
            link: None,
            time_ago: None,
        }
    }

    #[test]
    fn test_escape_covers_every_special_character() {
        let input = "_*[]()~`>#+-=|{}.!";
        let escaped = escape_markdown_v2(input);
        let mut chars = escaped.chars();
        for original in input.chars() {
            assert_eq!(chars.next(), Some('\\'));
            assert_eq!(chars.next(), Some(original));
        }
        assert_eq!(chars.next(), None);
    }

    #[test]
    fn test_escape_leaves_plain_text_untouched() {
        assert_eq!(escape_markdown_v2("Bitcoin hits 100k"), "Bitcoin hits 100k");
        assert_eq!(escape_markdown_v2(""), "");
    }

    #[test]
    fn test_escape_mixed_text() {
        assert_eq!(
            escape_markdown_v2("ETH 2.0 launch!"),
            "ETH 2\\.0 launch\\!"
        );
    }

    #[test]
    fn test_render_article_missing_fields_uses_fallbacks() {
        let rendered = render_article(&empty_article(), None, TextMode::MarkdownV2);
        assert!(rendered.contains("No title"));
        assert!(rendered.contains("Unknown"));
        assert!(rendered.contains("]()"));

        let plain = render_article(&empty_article(), Some(1), TextMode::Plain);
        assert_eq!(plain, "1. No title (Unknown)");
    }

    #[test]
    fn test_render_article_numbered_markdown_v2() {
        let rendered = render_article(&article("BTC up 5%"), Some(3), TextMode::MarkdownV2);
        assert!(rendered.starts_with("3\\. *BTC up 5%*"));
        assert!(rendered.contains("└ CoinDesk • 2h ago"));
        assert!(rendered.contains("[Read more](https://example.com/a)"));
    }

    #[test]
    fn test_render_article_unnumbered_uses_glyph_prefix() {
        let rendered = render_article(&article("t"), None, TextMode::MarkdownV2);
        assert!(rendered.starts_with("📰 "));
    }

    #[test]
    fn test_render_article_escapes_title_specials() {
        let rendered = render_article(
            &article("SEC approves ETF. Markets react!"),
            Some(1),
            TextMode::MarkdownV2,
        );
        assert!(rendered.contains("SEC approves ETF\\. Markets react\\!"));
        assert!(!rendered.contains("ETF. "));
    }

    #[test]
    fn test_render_article_markdown_mode() {
        let rendered = render_article(&article("t"), Some(2), TextMode::Markdown);
        assert_eq!(
            rendered,
            "2. [t](https://example.com/a)\n   _CoinDesk • 2h ago_"
        );
    }

    #[test]
    fn test_render_topic_line() {
        let topic = TrendingTopic {
            topic: Some("Bitcoin".to_string()),
            count: 14,
            sentiment: Sentiment::Bullish,
        };
        assert_eq!(
            render_topic(&topic, 1),
            "1\\. 🟢 *Bitcoin* \\- 14 mentions \\(bullish\\)"
        );
    }

    #[test]
    fn test_render_topic_glyphs_per_sentiment() {
        for (sentiment, glyph) in [
            (Sentiment::Bullish, "🟢"),
            (Sentiment::Bearish, "🔴"),
            (Sentiment::Neutral, "⚪"),
        ] {
            let topic = TrendingTopic {
                topic: Some("x".to_string()),
                count: 1,
                sentiment,
            };
            assert!(render_topic(&topic, 1).contains(glyph));
            assert!(render_topic_row(&topic).contains(glyph));
        }
    }

    #[test]
    fn test_render_topic_escapes_name() {
        let topic = TrendingTopic {
            topic: Some("Layer-2".to_string()),
            count: 3,
            sentiment: Sentiment::Neutral,
        };
        assert!(render_topic(&topic, 2).contains("Layer\\-2"));
    }

    #[test]
    fn test_render_block_empty_returns_placeholder() {
        let items: Vec<Article> = vec![];
        let rendered = render_block("*Title*", &items, |i, a| {
            render_article(a, Some(i + 1), TextMode::MarkdownV2)
        });
        assert_eq!(rendered, NO_DATA_PLACEHOLDER);
    }

    #[test]
    fn test_render_block_preserves_input_order() {
        let items = vec![article("first"), article("second"), article("third")];
        let rendered = render_block("*News*", &items, |i, a| {
            render_article(a, Some(i + 1), TextMode::MarkdownV2)
        });
        assert!(rendered.starts_with("*News*\n\n"));
        let first = rendered.find("first").unwrap();
        let second = rendered.find("second").unwrap();
        let third = rendered.find("third").unwrap();
        assert!(first < second && second < third);
        assert!(rendered.contains("1\\. "));
        assert!(rendered.contains("3\\. "));
    }

    #[test]
    fn test_render_sentiment_uppercase_label() {
        assert_eq!(render_sentiment(Sentiment::Bullish), "🟢 BULLISH");
        assert_eq!(render_sentiment(Sentiment::Neutral), "⚪ NEUTRAL");
    }
}
