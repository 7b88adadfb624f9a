// src/feed/parse.rs

//! Reading a previously written feed back into items.

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::Result;
use crate::models::FeedItem;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    guid: Option<RssGuid>,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RssGuid {
    #[serde(rename = "$text", default)]
    value: Option<String>,
}

/// Items and generation date of an existing feed.
#[derive(Debug, Clone, Default)]
pub struct ParsedFeed {
    pub pub_date: Option<String>,
    pub items: Vec<FeedItem>,
}

/// Parse an RSS document written by this crate (or a compatible one).
///
/// Items keep their stored values; a missing `pubDate` is replaced by
/// `fallback_pub_date`.
pub fn parse_feed(xml: &str, fallback_pub_date: &str) -> Result<ParsedFeed> {
    let rss: Rss = from_str(xml)?;

    let items = rss
        .channel
        .items
        .into_iter()
        .map(|item| FeedItem {
            title: item.title.unwrap_or_default(),
            link: item.link.unwrap_or_default().trim().to_string(),
            description: item.description.unwrap_or_default(),
            guid: item.guid.and_then(|g| g.value).unwrap_or_default(),
            pub_date: item
                .pub_date
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| fallback_pub_date.to_string()),
            location: None,
        })
        .collect();

    Ok(ParsedFeed {
        pub_date: rss.channel.pub_date,
        items,
    })
}
