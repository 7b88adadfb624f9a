// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Recruiting back end and pagination bounds
    #[serde(default)]
    pub source: SourceConfig,

    /// Feed channel metadata and output settings
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.source.page_size == 0 {
            return Err(AppError::validation("source.page_size must be > 0"));
        }
        if self.source.max_pages == 0 {
            return Err(AppError::validation("source.max_pages must be > 0"));
        }
        for (field, value) in [
            ("source.origin", &self.source.origin),
            ("source.base_url", &self.source.base_url),
            ("source.known_endpoint", &self.source.known_endpoint),
        ] {
            Url::parse(value)
                .map_err(|e| AppError::validation(format!("{field} is not a valid URL: {e}")))?;
        }
        if !self.source.known_endpoint.ends_with("/jobs") {
            return Err(AppError::validation(
                "source.known_endpoint must end with /jobs",
            ));
        }
        if self.feed.output_path.trim().is_empty() {
            return Err(AppError::validation("feed.output_path is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Pause after every accepted posting, in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Workday tenant and pagination bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Scheme and host of the Workday tenant
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Public career site prefix; job paths are appended to it
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Jobs endpoint used when discovery fails or is disabled
    #[serde(default = "defaults::known_endpoint")]
    pub known_endpoint: String,

    /// Career pages scanned for the jobs endpoint
    #[serde(default = "defaults::discovery_urls")]
    pub discovery_urls: Vec<String>,

    /// Whether to scan the career pages at all
    #[serde(default = "defaults::discover_endpoint")]
    pub discover_endpoint: bool,

    /// Postings requested per listing page
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Maximum number of newly accepted postings per run
    #[serde(default = "defaults::max_included")]
    pub max_included: usize,

    /// Runaway protection for pagination
    #[serde(default = "defaults::max_pages")]
    pub max_pages: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            origin: defaults::origin(),
            base_url: defaults::base_url(),
            known_endpoint: defaults::known_endpoint(),
            discovery_urls: defaults::discovery_urls(),
            discover_endpoint: defaults::discover_endpoint(),
            page_size: defaults::page_size(),
            max_included: defaults::max_included(),
            max_pages: defaults::max_pages(),
        }
    }
}

/// Feed channel metadata and output location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "defaults::feed_title")]
    pub title: String,

    #[serde(default = "defaults::base_url")]
    pub link: String,

    #[serde(default = "defaults::feed_description")]
    pub description: String,

    #[serde(default = "defaults::language")]
    pub language: String,

    /// Public URL of the feed itself (`atom:link rel="self"`)
    #[serde(default = "defaults::self_url")]
    pub self_url: String,

    /// Organization name used in item descriptions
    #[serde(default = "defaults::organization")]
    pub organization: String,

    /// Where the feed document is read from and written to
    #[serde(default = "defaults::output_path")]
    pub output_path: String,

    /// Items with shorter titles are dropped on every run
    #[serde(default = "defaults::min_title_length")]
    pub min_title_length: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: defaults::feed_title(),
            link: defaults::base_url(),
            description: defaults::feed_description(),
            language: defaults::language(),
            self_url: defaults::self_url(),
            organization: defaults::organization(),
            output_path: defaults::output_path(),
            min_title_length: defaults::min_title_length(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        300
    }

    // Source defaults
    pub fn origin() -> String {
        "https://unhcr.wd3.myworkdayjobs.com".into()
    }
    pub fn base_url() -> String {
        "https://unhcr.wd3.myworkdayjobs.com/en-GB/External".into()
    }
    pub fn known_endpoint() -> String {
        "https://unhcr.wd3.myworkdayjobs.com/wday/cxs/unhcr/External/jobs".into()
    }
    pub fn discovery_urls() -> Vec<String> {
        ["en-GB", "en-US", "fr-FR"]
            .iter()
            .map(|locale| format!("https://unhcr.wd3.myworkdayjobs.com/{locale}/External"))
            .collect()
    }
    pub fn discover_endpoint() -> bool {
        true
    }
    pub fn page_size() -> usize {
        20
    }
    pub fn max_included() -> usize {
        50
    }
    pub fn max_pages() -> usize {
        50
    }

    // Feed defaults
    pub fn feed_title() -> String {
        "UNHCR Job Vacancies".into()
    }
    pub fn feed_description() -> String {
        "List of vacancies at UNHCR".into()
    }
    pub fn language() -> String {
        "en".into()
    }
    pub fn self_url() -> String {
        "https://cinfoposte.github.io/unhcr-jobs/unhcr_jobs.xml".into()
    }
    pub fn organization() -> String {
        "UNHCR".into()
    }
    pub fn output_path() -> String {
        "unhcr_jobs.xml".into()
    }
    pub fn min_title_length() -> usize {
        5
    }
}
