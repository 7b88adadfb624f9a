// src/pipeline/escalate.rs

//! Per-posting eligibility decision with detail escalation.
//!
//! Classification runs in stages and stops at the first decisive one:
//!
//! 1. listing text (title, location, bullet fields): free
//! 2. listing text plus detail text from each [`DetailProvider`] in turn:
//!    one request per provider, only while still undecided

use crate::eligibility::{Verdict, classify, should_include};
use crate::models::Posting;
use crate::services::DetailProvider;

/// Result of evaluating one posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// `Accept` or `Reject`; never `Undecided`
    pub verdict: Verdict,

    /// Text the final verdict was computed over
    pub decision_text: String,

    /// Whether any detail provider was consulted
    pub escalated: bool,
}

impl Evaluation {
    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accept
    }
}

/// Escalation controller: cheap listing check first, detail providers
/// only for postings the listing leaves undecided.
pub struct Escalator {
    providers: Vec<Box<dyn DetailProvider>>,
}

impl Escalator {
    /// Providers are consulted in the given order.
    pub fn new(providers: Vec<Box<dyn DetailProvider>>) -> Self {
        Self { providers }
    }

    /// Listing-only controller; undecided postings are rejected.
    pub fn listing_only() -> Self {
        Self::new(Vec::new())
    }

    /// Decide whether `posting` (published at `job_url`) qualifies.
    pub async fn evaluate(&self, posting: &Posting, job_url: &str) -> Evaluation {
        let listing_text = posting.listing_text();

        let verdict = classify(&listing_text);
        if verdict.is_decided() {
            return Evaluation {
                verdict,
                decision_text: listing_text,
                escalated: false,
            };
        }

        log::info!("Checking detail page for: {}...", truncate(posting.title(), 60));
        let detail_text = self.gather_detail(posting, job_url, &listing_text).await;
        let decision_text = combine(&listing_text, &detail_text);
        let verdict = if should_include(&decision_text) {
            Verdict::Accept
        } else {
            Verdict::Reject
        };

        Evaluation {
            verdict,
            decision_text,
            escalated: true,
        }
    }

    /// Ask providers in order until the combined text is accepted. A later
    /// non-empty result replaces an earlier one; failures count as empty.
    async fn gather_detail(&self, posting: &Posting, job_url: &str, listing_text: &str) -> String {
        let mut detail = String::new();

        for provider in &self.providers {
            if !detail.is_empty() && should_include(&combine(listing_text, &detail)) {
                break;
            }
            match provider.detail_text(posting, job_url).await {
                Ok(Some(text)) if !text.trim().is_empty() => detail = text,
                Ok(_) => log::debug!("{} returned no text for {}", provider.name(), job_url),
                Err(e) => log::warn!(
                    "Failed to fetch {} detail for {}: {}",
                    provider.name(),
                    job_url,
                    e
                ),
            }
        }

        detail
    }
}

fn combine(listing_text: &str, detail_text: &str) -> String {
    format!("{listing_text} {detail_text}")
}

/// First `max` characters of `text`.
pub(crate) fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
