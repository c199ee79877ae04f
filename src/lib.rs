//! trend-scout - Windowed trend analytics for classified newsletter topics
//!
//! A reporting engine that compares recent newsletter activity against prior
//! periods: per-window counts, period-over-period deltas, concentration and
//! diversity indices, and tag co-occurrence statistics.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`ingest`] - Ingestion boundary (raw email payloads to topic items)
//! - [`models`] - Core data structures and types
//! - [`analytics`] - The windowed trend-analytics engine
//! - [`error`] - Unified error handling
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use trend_scout::analytics::report::analyze;
//! use trend_scout::ingest::load_items;
//!
//! fn main() -> anyhow::Result<()> {
//!     let items = load_items(std::path::Path::new("items.json"))?;
//!     let now = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
//!     let report = analyze(&items, now);
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::report::{analyze, TrendReport, WindowAnalysis};
    pub use crate::analytics::trends::TrendEntry;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::ingest::{load_items, IngestError};
    pub use crate::models::{CategoryTag, TopicItem};
}

// Direct re-exports for convenience
pub use analytics::report::{analyze, TrendReport, WindowAnalysis};
pub use models::{CategoryTag, TopicItem};
