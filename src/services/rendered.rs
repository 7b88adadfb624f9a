// src/services/rendered.rs

//! Public posting page fetcher.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::Posting;
use crate::services::DetailProvider;
use crate::utils::html::visible_text;
use crate::utils::http::fetch_html;

/// Fetches the public posting page and keeps its visible text.
#[derive(Debug, Clone)]
pub struct RenderedPageProvider {
    client: Client,
}

impl RenderedPageProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DetailProvider for RenderedPageProvider {
    async fn detail_text(&self, _posting: &Posting, job_url: &str) -> Result<Option<String>> {
        let Some(html) = fetch_html(&self.client, job_url).await? else {
            return Ok(None);
        };
        let text = visible_text(&html);
        Ok(Some(text).filter(|t| !t.is_empty()))
    }

    fn name(&self) -> &'static str {
        "rendered-page"
    }
}
