// src/pipeline/reconcile.rs

//! Merging newly accepted items into the published feed.

use std::collections::HashSet;

use crate::models::FeedItem;

/// Outcome of merging prior and new items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Prior items first, then new ones, both in their original order
    pub items: Vec<FeedItem>,
    pub dropped_short: usize,
    pub dropped_duplicate: usize,
}

/// Append `new` after `prior`, then drop items whose trimmed title has
/// fewer than `min_title_length` characters.
///
/// New items whose link is already in the feed (or repeated among the new
/// items) are dropped. Prior items are never rewritten.
pub fn reconcile(
    prior: Vec<FeedItem>,
    new: Vec<FeedItem>,
    min_title_length: usize,
) -> Reconciliation {
    let mut links: HashSet<String> = prior.iter().map(|i| i.link.trim().to_string()).collect();
    let mut result = Reconciliation::default();

    let mut merged = prior;
    for item in new {
        if links.insert(item.link.trim().to_string()) {
            merged.push(item);
        } else {
            log::debug!("Dropping duplicate item: {}", item.link);
            result.dropped_duplicate += 1;
        }
    }

    for item in merged {
        if item.title.trim().chars().count() >= min_title_length {
            result.items.push(item);
        } else {
            log::debug!("Dropping item with short title: {:?}", item.title);
            result.dropped_short += 1;
        }
    }

    result
}
