// src/pipeline/run.rs

//! One feed update: load prior feed, harvest, reconcile, write.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::Result;
use crate::feed::{ParsedFeed, format_pub_date, parse_feed, render_feed};
use crate::models::{Channel, Config, FeedDocument, FeedItem, links_of};
use crate::pipeline::escalate::Escalator;
use crate::pipeline::harvest::{HarvestLimits, HarvestState, Harvester, StopReason};
use crate::pipeline::item::ItemBuilder;
use crate::pipeline::reconcile::reconcile;
use crate::services::{
    DetailProvider, ListingSource, RenderedPageProvider, WorkdayClient, WorkdayDetailProvider,
    discover_endpoint,
};
use crate::storage::FeedStore;
use crate::utils::http;

/// Statistics of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub prior_items: usize,
    pub processed: usize,
    pub included: usize,
    pub pages_fetched: usize,

    /// Items in the written feed
    pub written: usize,

    pub stop: StopReason,
}

impl RunSummary {
    /// The listing could not be walked to a normal stop.
    pub fn is_degraded(&self) -> bool {
        self.stop.is_degraded()
    }
}

/// Load the currently published items.
///
/// A missing feed is a cold start. A feed that cannot be parsed is logged
/// and treated as empty; storage errors are returned.
pub async fn load_prior(store: &dyn FeedStore, fallback_pub_date: &str) -> Result<Vec<FeedItem>> {
    let Some(xml) = store.read().await? else {
        log::info!("No existing feed at {}, starting fresh", store.location());
        return Ok(Vec::new());
    };

    match parse_feed(&xml, fallback_pub_date) {
        Ok(ParsedFeed { items, .. }) => {
            log::info!("Loaded {} existing items from {}", items.len(), store.location());
            Ok(items)
        }
        Err(e) => {
            log::warn!(
                "Could not parse existing feed at {}, starting fresh: {}",
                store.location(),
                e
            );
            Ok(Vec::new())
        }
    }
}

/// Run one update against the given collaborators and write the feed.
pub async fn run_feed(
    config: &Config,
    listing: &dyn ListingSource,
    escalator: &Escalator,
    store: &dyn FeedStore,
    now: DateTime<FixedOffset>,
) -> Result<RunSummary> {
    let now_rfc2822 = format_pub_date(&now);

    let prior = load_prior(store, &now_rfc2822).await?;
    let prior_items = prior.len();
    let mut state = HarvestState::new(links_of(&prior));

    let harvester = Harvester::new(
        listing,
        escalator,
        ItemBuilder::new(&config.feed.organization),
        &config.source.base_url,
        HarvestLimits::from(&config.source),
        now,
    )
    .with_accept_delay(Duration::from_millis(config.http.request_delay_ms));
    let stop = harvester.run(&mut state).await;
    log::info!("Stopped paginating: {}", stop);

    let included = state.accepted.len();
    let merged = reconcile(prior, state.accepted, config.feed.min_title_length);
    if merged.dropped_short > 0 {
        log::info!(
            "Dropped {} items with titles shorter than {} characters",
            merged.dropped_short,
            config.feed.min_title_length
        );
    }

    let document = FeedDocument {
        channel: Channel {
            title: config.feed.title.clone(),
            link: config.feed.link.clone(),
            description: config.feed.description.clone(),
            language: config.feed.language.clone(),
            self_url: config.feed.self_url.clone(),
            pub_date: now_rfc2822,
        },
        items: merged.items,
    };
    let xml = render_feed(&document)?;
    store.write(&xml).await?;

    let summary = RunSummary {
        prior_items,
        processed: state.processed,
        included,
        pages_fetched: state.pages_fetched,
        written: document.items.len(),
        stop,
    };
    log::info!(
        "Feed written to {}: {} items ({} existing, {} new, {} postings processed)",
        store.location(),
        summary.written,
        summary.prior_items,
        summary.included,
        summary.processed
    );
    if summary.is_degraded() {
        log::warn!("Listing was only partially processed ({})", summary.stop);
    }

    Ok(summary)
}

/// Run one update against the live career site.
pub async fn run_pipeline(config: &Config, store: &dyn FeedStore) -> Result<RunSummary> {
    config.validate()?;
    let client = http::create_client(config)?;

    let endpoint = discover_endpoint(&client, &config.source).await;
    let listing = WorkdayClient::new(client.clone(), &endpoint);
    let providers: Vec<Box<dyn DetailProvider>> = vec![
        Box::new(WorkdayDetailProvider::new(client.clone(), &endpoint)),
        Box::new(RenderedPageProvider::new(client)),
    ];
    let escalator = Escalator::new(providers);

    run_feed(config, &listing, &escalator, store, Utc::now().fixed_offset()).await
}
