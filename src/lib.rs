// src/lib.rs

//! Job vacancy feed builder for Workday career sites

pub mod eligibility;
pub mod error;
pub mod feed;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
