//! Windowed trend-analytics engine
//!
//! A pure, synchronous transformation: a list of [`crate::models::TopicItem`]
//! plus an injected "now" date in, one [`report::TrendReport`] out. The engine
//! performs no I/O, reads no clock, and keeps no state between invocations.
//!
//! Submodules, leaves first:
//!
//! - [`windows`] - named comparison windows (current + previous period)
//! - [`counting`] - per-item deduplicated tag/category/regulatory counting
//! - [`trends`] - period-over-period deltas and new-tag detection
//! - [`cooccurrence`] - frequently paired tags within a window
//! - [`concentration`] - distribution-concentration indices (HHI, top-3 share)
//! - [`diversity`] - distinct senders behind the leading tags
//! - [`report`] - per-window assembly into the final report

pub mod concentration;
pub mod cooccurrence;
pub mod counting;
pub mod diversity;
pub mod report;
pub mod trends;
pub mod windows;

pub use concentration::Concentration;
pub use cooccurrence::PairCount;
pub use counting::KeyCounter;
pub use report::{analyze, TagCount, TrendReport, WindowAnalysis};
pub use trends::TrendEntry;
pub use windows::{ComparisonWindow, DateRange};
