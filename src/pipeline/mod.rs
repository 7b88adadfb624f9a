// src/pipeline/mod.rs

//! Pipeline stages of a feed update.
//!
//! - `escalate`: per-posting decision with on-demand detail fetches
//! - `harvest`: pagination over the listing
//! - `reconcile`: merge with the published feed
//! - `run`: one complete update

pub mod escalate;
pub mod harvest;
pub mod item;
pub mod reconcile;
pub mod run;

pub use escalate::{Escalator, Evaluation};
pub use harvest::{HarvestLimits, HarvestState, Harvester, StopReason};
pub use item::ItemBuilder;
pub use reconcile::{Reconciliation, reconcile};
pub use run::{RunSummary, load_prior, run_feed, run_pipeline};
