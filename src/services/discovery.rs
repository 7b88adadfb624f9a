// src/services/discovery.rs

//! Jobs endpoint discovery.
//!
//! The career site embeds the CXS API path (`/wday/cxs/<tenant>/<site>/jobs`)
//! in its HTML. When no configured page reveals it, the known endpoint is used.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;

use crate::models::SourceConfig;
use crate::utils::http::fetch_html;

static CXS_JOBS_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/wday/cxs/([^/\s"'<>]+)/([^/\s"'<>]+)/jobs"#).expect("cxs path regex")
});

/// Extract the jobs endpoint from a career page, rooted at `origin`.
pub fn endpoint_from_html(origin: &str, html: &str) -> Option<String> {
    let caps = CXS_JOBS_PATH.captures(html)?;
    Some(format!(
        "{}/wday/cxs/{}/{}/jobs",
        origin.trim_end_matches('/'),
        &caps[1],
        &caps[2]
    ))
}

/// Resolve the jobs endpoint, falling back to `source.known_endpoint`.
pub async fn discover_endpoint(client: &Client, source: &SourceConfig) -> String {
    if source.discover_endpoint {
        for url in &source.discovery_urls {
            match fetch_html(client, url).await {
                Ok(Some(html)) => {
                    if let Some(endpoint) = endpoint_from_html(&source.origin, &html) {
                        log::info!("Discovered endpoint: {}", endpoint);
                        return endpoint;
                    }
                }
                Ok(None) => {}
                Err(e) => log::warn!("Failed to fetch {}: {}", url, e),
            }
        }
    }

    log::info!("Using known endpoint: {}", source.known_endpoint);
    source.known_endpoint.clone()
}
