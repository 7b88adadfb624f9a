// src/pipeline/item.rs

//! Building feed items from accepted postings.

use chrono::{DateTime, FixedOffset};

use crate::eligibility::detected_grades;
use crate::feed::{format_pub_date, guid_for, parse_posted_on};
use crate::models::{FeedItem, Posting};

/// Turns accepted postings into feed items.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    organization: String,
}

impl ItemBuilder {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
        }
    }

    /// Build the item for `posting` published at `job_url`.
    ///
    /// Grades are reported from `decision_text`, the text the inclusion
    /// decision was made on. `now` is used when the posting date cannot be
    /// parsed.
    pub fn build(
        &self,
        posting: &Posting,
        job_url: &str,
        decision_text: &str,
        now: &DateTime<FixedOffset>,
    ) -> FeedItem {
        let title = posting.title();
        let location = posting.location();

        let mut parts = vec![
            format!(
                "{} has a vacancy for the position of {}.",
                self.organization, title
            ),
            format!("Location: {location}."),
        ];
        let grades = detected_grades(decision_text);
        if !grades.is_empty() {
            parts.push(format!(
                "Grade: {}.",
                grades.into_iter().collect::<Vec<_>>().join(", ")
            ));
        }
        if let Some(posted_on) = posting.posted_on() {
            parts.push(format!("Posted: {posted_on}."));
        }

        let published = posting
            .posted_on()
            .and_then(parse_posted_on)
            .unwrap_or(*now);

        FeedItem {
            title: title.to_string(),
            link: job_url.to_string(),
            description: parts.join(" "),
            guid: guid_for(job_url),
            pub_date: format_pub_date(&published),
            location: Some(location.to_string()),
        }
    }
}
