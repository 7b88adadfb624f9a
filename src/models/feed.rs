// src/models/feed.rs

//! Feed document data structures.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A published feed entry. `link` is the canonical URL and sole identity key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,

    /// Canonical URL of the posting
    pub link: String,

    pub description: String,

    /// Stable identifier derived from `link`
    pub guid: String,

    /// RFC 2822 publication timestamp
    pub pub_date: String,

    /// Location of the posting; not persisted, absent on items read back
    #[serde(default, skip_serializing)]
    pub location: Option<String>,
}

/// Channel-level metadata of the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,

    /// Public URL of the feed itself
    pub self_url: String,

    /// Generation timestamp (RFC 2822)
    pub pub_date: String,
}

/// The persisted feed: channel metadata plus ordered items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedDocument {
    pub channel: Channel,
    pub items: Vec<FeedItem>,
}

/// Collect the trimmed, non-empty links of `items`.
pub fn links_of(items: &[FeedItem]) -> HashSet<String> {
    items
        .iter()
        .map(|item| item.link.trim())
        .filter(|link| !link.is_empty())
        .map(str::to_string)
        .collect()
}
