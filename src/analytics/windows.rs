//! Comparison window selection
//!
//! Defines the named reporting windows relative to an injected "now" date.
//! The caller supplies `now` explicitly so the engine stays deterministic
//! under test; nothing in this module reads a system clock.

use chrono::{Duration, NaiveDate};

/// Inclusive date range with ISO-formatted bounds
///
/// Bounds are compared as strings. ISO dates sort lexicographically the same
/// as chronologically, and a missing item date (empty string) sorts before
/// every real date, so it fails any non-trivial lower bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether a date key (as returned by `TopicItem::date_key`) falls inside
    /// this range, bounds inclusive
    pub fn contains(&self, date_key: &str) -> bool {
        self.from.as_str() <= date_key && date_key <= self.to.as_str()
    }
}

/// A named current/previous date-range pair used for period-over-period
/// comparison. `previous` is `None` for windows with no comparison period.
#[derive(Debug, Clone)]
pub struct ComparisonWindow {
    pub name: &'static str,
    pub current: DateRange,
    pub previous: Option<DateRange>,
}

/// ISO date of `now − n` days
pub fn days_ago(now: NaiveDate, n: i64) -> String {
    (now - Duration::days(n)).format("%Y-%m-%d").to_string()
}

/// The reporting windows: 7d and 30d with a preceding period of equal length,
/// 90d without one.
pub fn comparison_windows(now: NaiveDate) -> Vec<ComparisonWindow> {
    let today = days_ago(now, 0);
    vec![
        ComparisonWindow {
            name: "7d",
            current: DateRange::new(days_ago(now, 7), today.clone()),
            previous: Some(DateRange::new(days_ago(now, 14), days_ago(now, 8))),
        },
        ComparisonWindow {
            name: "30d",
            current: DateRange::new(days_ago(now, 30), today.clone()),
            previous: Some(DateRange::new(days_ago(now, 60), days_ago(now, 31))),
        },
        ComparisonWindow {
            name: "90d",
            current: DateRange::new(days_ago(now, 90), today),
            previous: None,
        },
    ]
}
