// src/utils/mod.rs

//! Utility functions and helpers.

pub mod html;
pub mod http;
pub mod xml;

/// Build the public URL of a posting from its external path.
///
/// Absolute URLs are returned unchanged.
pub fn build_job_url(base_url: &str, external_path: &str) -> String {
    let path = external_path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// URL of the structured detail record for a posting, derived from the
/// jobs endpoint (`.../External/jobs` + `/job/...` -> `.../External/job/...`).
pub fn detail_url(endpoint: &str, external_path: &str) -> String {
    let root = endpoint
        .trim_end_matches('/')
        .strip_suffix("/jobs")
        .unwrap_or(endpoint);
    format!("{}{}", root, external_path.trim())
}
