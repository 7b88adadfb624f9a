// src/feed/mod.rs

//! Feed document format.
//!
//! - `render_feed`: serialize a [`FeedDocument`](crate::models::FeedDocument) as RSS 2.0
//! - `parse_feed`: read the items of a previously written feed back
//! - `guid_for`: stable item identifiers

mod guid;
mod parse;
mod render;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

pub use guid::{GUID_WIDTH, guid_for};
pub use parse::{ParsedFeed, parse_feed};
pub use render::render_feed;

/// Format a timestamp the way RSS expects it (RFC 2822).
pub fn format_pub_date(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc2822()
}

/// Parse a listing `postedOn` value.
///
/// Accepts RFC 3339 (including a trailing `Z`), naive ISO date-times and
/// plain dates; naive values are taken as UTC. Relative phrases such as
/// "Posted Today" yield `None`.
pub fn parse_posted_on(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
