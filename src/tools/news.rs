use super::Tool;
use crate::error::LookupError;
use crate::types::ToolOutcome;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::time::Duration;
use tracing::debug;

/// RSS feed of the Changhua County Government news page
const FEED_URL: &str = "https://www.chcg.gov.tw/ch2/rssnews2b.aspx";

/// The feed host rejects requests without a browser-looking user agent
const USER_AGENT: &str = "Mozilla/5.0 (compatible; formosa-agent/0.1)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RESULTS: usize = 3;

/// Parameters for news searches
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct NewsParams {
    /// Keyword to match against entry titles and summaries
    pub keyword: String,
}

/// A single feed entry, fields verbatim from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssEntry>,
}

#[derive(Debug, Deserialize)]
struct RssEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    link: String,
}

impl From<RssEntry> for NewsItem {
    fn from(entry: RssEntry) -> Self {
        Self {
            title: entry.title,
            summary: entry.description,
            link: entry.link,
        }
    }
}

/// Tool that searches the Changhua County Government news feed by keyword
#[derive(Debug, Clone)]
pub struct NewsSearchTool {
    feed_url: String,
    client: Client,
}

impl Default for NewsSearchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsSearchTool {
    pub fn new() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Override the feed URL (used by tests against a mock server)
    pub fn with_feed_url(mut self, feed_url: impl Into<String>) -> Self {
        self.feed_url = feed_url.into();
        self
    }
}

impl Tool for NewsSearchTool {
    fn name(&self) -> &'static str {
        "search_news"
    }

    fn description(&self) -> &'static str {
        "Search the Changhua County Government news feed for a keyword"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "keyword": {
                    "type": "string",
                    "description": "Keyword matched against news titles and summaries"
                }
            },
            "required": ["keyword"]
        })
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::ToolError>>
                + Send
                + '_,
        >,
    > {
        let client = self.client.clone();
        let feed_url = self.feed_url.clone();

        Box::pin(async move {
            let params: NewsParams = serde_json::from_value(parameters).map_err(|err| {
                crate::ToolError::InvalidParameters(err.to_string())
            })?;

            debug!(keyword = %params.keyword, "searching news feed");

            let outcome: ToolOutcome = fetch_news(&client, &feed_url, &params.keyword)
                .await
                .into();
            outcome.into_value()
        })
    }
}

async fn fetch_news(
    client: &Client,
    feed_url: &str,
    keyword: &str,
) -> Result<String, LookupError> {
    let response = client
        .get(feed_url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|err| LookupError::Transport(format!("News feed request error: {err}")))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(LookupError::Transport(format!(
            "News feed request failed with HTTP status {}.",
            status.as_u16()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|err| LookupError::Transport(format!("News feed request error: {err}")))?;

    let items = parse_feed(&body)?;
    build_report(&items, keyword)
}

/// Deserialize the RSS document, keeping entry fields verbatim
fn parse_feed(xml: &str) -> Result<Vec<NewsItem>, LookupError> {
    let document: RssDocument = quick_xml::de::from_str(xml)
        .map_err(|err| LookupError::UpstreamFormat(format!("Failed to parse news feed: {err}")))?;

    Ok(document
        .channel
        .items
        .into_iter()
        .map(NewsItem::from)
        .collect())
}

fn matches_keyword(item: &NewsItem, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    item.title.to_lowercase().contains(&keyword)
        || item.summary.to_lowercase().contains(&keyword)
}

fn build_report(items: &[NewsItem], keyword: &str) -> Result<String, LookupError> {
    if items.is_empty() {
        return Err(LookupError::NotFound(
            "The news feed returned no items.".to_string(),
        ));
    }

    let matched: Vec<&NewsItem> = items
        .iter()
        .filter(|item| matches_keyword(item, keyword))
        .collect();

    if matched.is_empty() {
        return Err(LookupError::NotFound(format!(
            "No relevant news found for keyword '{keyword}'."
        )));
    }

    // Feed order is preserved; no relevance ranking beyond containment
    let blocks: Vec<String> = matched
        .iter()
        .take(MAX_RESULTS)
        .map(|item| {
            format!(
                "Title: {}\nSummary: {}\nLink: {}\n",
                item.title, item.summary, item.link
            )
        })
        .collect();

    Ok(blocks.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, summary: &str, link: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            summary: summary.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_parse_feed() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
    <channel>
        <title>彰化縣政府新聞</title>
        <link>https://www.chcg.gov.tw</link>
        <item>
            <title><![CDATA[花卉博覽會開幕]]></title>
            <description><![CDATA[一年一度的花卉博覽會於溪州公園開幕。]]></description>
            <link>https://www.chcg.gov.tw/news/1</link>
        </item>
        <item>
            <title>交通管制公告</title>
            <link>https://www.chcg.gov.tw/news/2</link>
        </item>
    </channel>
</rss>"#;

        let items = parse_feed(xml).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "花卉博覽會開幕");
        assert_eq!(items[0].summary, "一年一度的花卉博覽會於溪州公園開幕。");
        assert_eq!(items[0].link, "https://www.chcg.gov.tw/news/1");
        // Missing description defaults to empty instead of failing the entry
        assert_eq!(items[1].summary, "");
    }

    #[test]
    fn test_parse_feed_rejects_malformed_xml() {
        let err = parse_feed("<rss><channel><item></rss>").unwrap_err();
        assert!(matches!(err, LookupError::UpstreamFormat(_)));
        assert!(err.to_string().starts_with("Failed to parse news feed:"));
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let entry = item("Road Closure on Route 1", "", "");
        assert!(matches_keyword(&entry, "route"));
        assert!(matches_keyword(&entry, "ROAD"));
        assert!(!matches_keyword(&entry, "bridge"));

        let entry = item("", "Annual flower EXPO opens", "");
        assert!(matches_keyword(&entry, "expo"));
    }

    #[test]
    fn test_report_caps_at_three_items() {
        let items: Vec<NewsItem> = (1..=5)
            .map(|n| {
                item(
                    &format!("News {n}"),
                    "about roads",
                    &format!("https://example.com/{n}"),
                )
            })
            .collect();

        let report = build_report(&items, "roads").unwrap();
        assert_eq!(report.matches("Title:").count(), 3);
        // Feed order, not re-sorted
        assert!(report.contains("News 1"));
        assert!(report.contains("News 3"));
        assert!(!report.contains("News 4"));
    }

    #[test]
    fn test_report_block_layout() {
        let items = vec![
            item("First", "one", "https://example.com/1"),
            item("Second", "one more", "https://example.com/2"),
        ];
        let report = build_report(&items, "one").unwrap();
        assert_eq!(
            report,
            "Title: First\nSummary: one\nLink: https://example.com/1\n\
             \n\
             Title: Second\nSummary: one more\nLink: https://example.com/2\n"
        );
    }

    #[test]
    fn test_empty_feed_is_an_error() {
        let err = build_report(&[], "anything").unwrap_err();
        assert_eq!(err.to_string(), "The news feed returned no items.");
    }

    #[test]
    fn test_no_match_embeds_keyword() {
        let items = vec![item("Local news", "nothing relevant", "")];
        let err = build_report(&items, "typhoon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No relevant news found for keyword 'typhoon'."
        );
    }
}
