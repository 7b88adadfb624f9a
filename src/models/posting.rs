// src/models/posting.rs

//! Posting data structures as returned by the Workday jobs API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Location shown when a posting carries none.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// One job opening from a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Job title
    #[serde(default)]
    pub title: String,

    /// Path of the posting relative to the career site (or a full URL)
    #[serde(default)]
    pub external_path: String,

    /// Free-form location text
    #[serde(default, rename = "locationsText")]
    pub location: Option<String>,

    /// Subtitle fields, usually the requisition id and sometimes the grade
    #[serde(default)]
    pub bullet_fields: Vec<String>,

    /// Posting date as reported by the listing
    #[serde(default)]
    pub posted_on: Option<String>,
}

impl Posting {
    /// Trimmed title.
    pub fn title(&self) -> &str {
        self.title.trim()
    }

    /// Location text, or [`UNKNOWN_LOCATION`] when absent.
    pub fn location(&self) -> &str {
        match self.location.as_deref().map(str::trim) {
            Some(loc) if !loc.is_empty() => loc,
            _ => UNKNOWN_LOCATION,
        }
    }

    /// Posting date, if the listing reported a non-empty one.
    pub fn posted_on(&self) -> Option<&str> {
        self.posted_on
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Listing-level text used for classification: title, location and
    /// bullet fields in that order.
    pub fn listing_text(&self) -> String {
        let mut parts = vec![self.title(), self.location()];
        parts.extend(self.bullet_fields.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// One page of the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    /// Total number of postings available on the back end
    #[serde(default)]
    pub total: usize,

    #[serde(default)]
    pub job_postings: Vec<Posting>,
}

/// Structured detail record of a single posting.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    #[serde(default)]
    pub job_posting_info: JobPostingInfo,
}

/// Description-like fields of a structured detail record.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingInfo {
    #[serde(default)]
    pub job_description: Option<String>,

    #[serde(default)]
    pub additional_information: Option<String>,

    #[serde(default)]
    pub job_req_sub_category: Option<Value>,

    #[serde(default)]
    pub worker_sub_type: Option<Value>,
}

impl JobPostingInfo {
    /// Raw (possibly HTML) fragments in a fixed order, empty ones skipped.
    pub fn fragments(&self) -> Vec<String> {
        let mut out = Vec::new();
        for html in [&self.job_description, &self.additional_information]
            .into_iter()
            .flatten()
        {
            out.push(html.clone());
        }
        for value in [&self.job_req_sub_category, &self.worker_sub_type]
            .into_iter()
            .flatten()
        {
            out.push(value_text(value));
        }
        out.retain(|s| !s.trim().is_empty());
        out
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("descriptor")
            .map(value_text)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}
