// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER};

use crate::error::{AppError, Result};
use crate::models::Config;

/// `Accept` value for rendered pages.
pub const ACCEPT_HTML: &str = "text/html";

/// Create the shared asynchronous HTTP client.
///
/// Every request carries the configured User-Agent, a JSON `Accept`
/// header and the `Origin`/`Referer` pair Workday expects from its own
/// front end. A single bounded-timeout attempt is made per call.
pub fn create_client(config: &Config) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ORIGIN, header_value(&config.source.origin)?);
    headers.insert(REFERER, header_value(&config.source.base_url)?);

    let client = reqwest::Client::builder()
        .user_agent(&config.http.user_agent)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .build()?;
    Ok(client)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::config(format!("invalid header value '{value}': {e}")))
}

/// GET `url` as HTML, returning the body only on a 200 response.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<Option<String>> {
    let response = client.get(url).header(ACCEPT, ACCEPT_HTML).send().await?;
    if response.status() != reqwest::StatusCode::OK {
        log::debug!("GET {} returned {}", url, response.status());
        return Ok(None);
    }
    Ok(Some(response.text().await?))
}
