// src/storage/mod.rs

//! Storage abstractions for the feed document.
//!
//! The feed is read once at the start of a run and fully rewritten at the
//! end; there are no partial updates.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalFeedStore;

/// Trait for feed document backends.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Read the stored document, `None` if it does not exist yet.
    async fn read(&self) -> Result<Option<String>>;

    /// Replace the stored document atomically.
    async fn write(&self, document: &str) -> Result<()>;

    /// Human-readable location for log lines.
    fn location(&self) -> String;
}
