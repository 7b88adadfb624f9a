// src/models/mod.rs

//! Domain models for the feed harvester.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod feed;
mod posting;

// Re-export all public types
pub use config::{Config, FeedConfig, HttpConfig, SourceConfig};
pub use feed::{Channel, FeedDocument, FeedItem, links_of};
pub use posting::{JobDetail, JobPostingInfo, ListingPage, Posting, UNKNOWN_LOCATION};
