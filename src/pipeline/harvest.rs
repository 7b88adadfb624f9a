// src/pipeline/harvest.rs

//! Pagination driver.
//!
//! Walks the listing page by page and feeds unseen postings to the
//! [`Escalator`]. Stops on the first of: an empty page, the accepted-item
//! quota, the end of the listing, the page cap, or a page fetch error.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};

use crate::models::{FeedItem, Posting, SourceConfig};
use crate::pipeline::escalate::{Escalator, truncate};
use crate::pipeline::item::ItemBuilder;
use crate::services::ListingSource;
use crate::utils::build_job_url;

/// Bounds of one harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestLimits {
    pub page_size: usize,
    pub max_included: usize,
    pub max_pages: usize,
}

impl From<&SourceConfig> for HarvestLimits {
    fn from(source: &SourceConfig) -> Self {
        Self {
            page_size: source.page_size,
            max_included: source.max_included,
            max_pages: source.max_pages,
        }
    }
}

/// Why pagination ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EmptyPage,
    QuotaReached,
    EndOfListing,
    PageLimit,
    FetchFailed,
}

impl StopReason {
    /// Pagination ended because of an error rather than a bound.
    pub fn is_degraded(self) -> bool {
        self == StopReason::FetchFailed
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::EmptyPage => "empty page",
            StopReason::QuotaReached => "included quota reached",
            StopReason::EndOfListing => "end of listing",
            StopReason::PageLimit => "page limit reached",
            StopReason::FetchFailed => "page fetch failed",
        };
        f.write_str(text)
    }
}

/// Mutable state of one run, threaded through the pagination loop.
#[derive(Debug, Default)]
pub struct HarvestState {
    /// Canonical URLs already published or accepted in this run
    pub seen: HashSet<String>,

    /// Accepted items in acceptance order
    pub accepted: Vec<FeedItem>,

    /// New postings looked at (duplicates included)
    pub processed: usize,

    pub pages_fetched: usize,
}

impl HarvestState {
    /// Start a run that already knows `seen` URLs.
    pub fn new(seen: HashSet<String>) -> Self {
        Self {
            seen,
            ..Self::default()
        }
    }
}

/// Pagination driver over a [`ListingSource`].
pub struct Harvester<'a> {
    listing: &'a dyn ListingSource,
    escalator: &'a Escalator,
    items: ItemBuilder,
    base_url: String,
    limits: HarvestLimits,
    accept_delay: Duration,
    now: DateTime<FixedOffset>,
}

impl<'a> Harvester<'a> {
    pub fn new(
        listing: &'a dyn ListingSource,
        escalator: &'a Escalator,
        items: ItemBuilder,
        base_url: impl Into<String>,
        limits: HarvestLimits,
        now: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            listing,
            escalator,
            items,
            base_url: base_url.into(),
            limits,
            accept_delay: Duration::ZERO,
            now,
        }
    }

    /// Pause after every accepted posting.
    pub fn with_accept_delay(mut self, delay: Duration) -> Self {
        self.accept_delay = delay;
        self
    }

    /// Walk the listing, accumulating into `state`.
    pub async fn run(&self, state: &mut HarvestState) -> StopReason {
        let limits = self.limits;
        let mut offset = 0;

        while state.accepted.len() < limits.max_included && state.pages_fetched < limits.max_pages
        {
            log::info!("Fetching page at offset={}...", offset);
            let page = match self.listing.fetch_page(offset, limits.page_size).await {
                Ok(page) => page,
                Err(e) => {
                    log::error!("Failed to fetch listings at offset={}: {}", offset, e);
                    return StopReason::FetchFailed;
                }
            };

            if page.job_postings.is_empty() {
                log::info!("No more job postings returned. Done paginating.");
                return StopReason::EmptyPage;
            }
            log::info!(
                "Got {} postings (total available: {})",
                page.job_postings.len(),
                page.total
            );

            for posting in &page.job_postings {
                if state.accepted.len() >= limits.max_included {
                    break;
                }
                self.consider(posting, state).await;
            }

            offset += limits.page_size;
            state.pages_fetched += 1;

            if offset >= page.total {
                log::info!("Reached end of all postings.");
                return StopReason::EndOfListing;
            }
        }

        if state.accepted.len() >= limits.max_included {
            StopReason::QuotaReached
        } else {
            StopReason::PageLimit
        }
    }

    async fn consider(&self, posting: &Posting, state: &mut HarvestState) {
        let job_url = build_job_url(&self.base_url, &posting.external_path);
        state.processed += 1;

        if state.seen.contains(&job_url) {
            log::debug!("Already published: {}", job_url);
            return;
        }

        let evaluation = self.escalator.evaluate(posting, &job_url).await;
        if !evaluation.is_accepted() {
            log::debug!("Excluded: {}", truncate(posting.title(), 60));
            return;
        }

        let item = self
            .items
            .build(posting, &job_url, &evaluation.decision_text, &self.now);
        state.seen.insert(job_url);
        state.accepted.push(item);
        log::info!(
            "INCLUDED ({}/{}): {}",
            state.accepted.len(),
            self.limits.max_included,
            truncate(posting.title(), 60)
        );

        if !self.accept_delay.is_zero() {
            tokio::time::sleep(self.accept_delay).await;
        }
    }
}
