// src/services/mod.rs

//! Service layer: the remote collaborators of the pipeline.
//!
//! - Listing pages (`WorkdayClient`)
//! - Structured posting details (`WorkdayDetailProvider`)
//! - Rendered posting pages (`RenderedPageProvider`)
//! - Jobs endpoint discovery (`discover_endpoint`)

mod discovery;
mod rendered;
mod workday;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ListingPage, Posting};

pub use discovery::{discover_endpoint, endpoint_from_html};
pub use rendered::RenderedPageProvider;
pub use workday::{WorkdayClient, WorkdayDetailProvider};

/// Paginated source of postings.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch `limit` postings starting at `offset`.
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<ListingPage>;
}

/// On-demand source of free text describing one posting.
#[async_trait]
pub trait DetailProvider: Send + Sync {
    /// Detail text for `posting`; `Ok(None)` when the source has nothing.
    async fn detail_text(&self, posting: &Posting, job_url: &str) -> Result<Option<String>>;

    fn name(&self) -> &'static str;
}
