// src/services/workday.rs

//! Workday CXS JSON API client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::Result;
use crate::models::{JobDetail, ListingPage, Posting};
use crate::services::{DetailProvider, ListingSource};
use crate::utils::detail_url;
use crate::utils::html::fragment_text;

/// Listing client for a Workday jobs endpoint.
#[derive(Debug, Clone)]
pub struct WorkdayClient {
    client: Client,
    endpoint: String,
}

impl WorkdayClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ListingSource for WorkdayClient {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<ListingPage> {
        let payload = json!({
            "limit": limit,
            "offset": offset,
            "searchText": "",
            "appliedFacets": {},
        });
        let page = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json::<ListingPage>()
            .await?;
        Ok(page)
    }
}

/// Structured detail records from the same Workday tenant.
#[derive(Debug, Clone)]
pub struct WorkdayDetailProvider {
    client: Client,
    endpoint: String,
}

impl WorkdayDetailProvider {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl DetailProvider for WorkdayDetailProvider {
    async fn detail_text(&self, posting: &Posting, _job_url: &str) -> Result<Option<String>> {
        if posting.external_path.trim().is_empty() {
            return Ok(None);
        }
        let url = detail_url(&self.endpoint, &posting.external_path);
        let response = self.client.get(&url).send().await?;
        if response.status() != reqwest::StatusCode::OK {
            log::debug!("Detail JSON {} returned {}", url, response.status());
            return Ok(None);
        }
        let detail: JobDetail = response.json().await?;

        let text = detail
            .job_posting_info
            .fragments()
            .iter()
            .map(|fragment| fragment_text(fragment))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Some(text).filter(|t| !t.is_empty()))
    }

    fn name(&self) -> &'static str {
        "workday-json"
    }
}
