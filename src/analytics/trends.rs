//! Period-over-period trend computation
//!
//! Compares a current counter against a previous counter over the union of
//! their keys, and selects the rising/falling entries for the report.

use serde::{Deserialize, Serialize};

use super::counting::KeyCounter;

/// One key's period-over-period movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    /// Tag key (`"category → tag"`) or bare category name
    pub name: String,

    /// Count in the current period
    pub current: u64,

    /// Count in the previous period
    pub previous: u64,

    /// `current − previous`
    pub diff: i64,

    /// Rounded percentage change; `None` exactly when `previous == 0`
    pub change_pct: Option<i64>,
}

impl TrendEntry {
    fn new(name: &str, current: u64, previous: u64) -> Self {
        let diff = current as i64 - previous as i64;
        let change_pct = if previous == 0 {
            None
        } else {
            Some(((diff as f64 / previous as f64) * 100.0).round() as i64)
        };
        Self {
            name: name.to_string(),
            current,
            previous,
            diff,
            change_pct,
        }
    }
}

/// Trend entries for the union of keys in either counter
///
/// Iterates current keys in first-seen order, then previous-only keys, so the
/// output order is deterministic and ties in later rankings break by first
/// appearance. Keys absent from both counters cannot occur; a present key
/// always has a count of at least 1.
pub fn compute_trends(current: &KeyCounter, previous: &KeyCounter) -> Vec<TrendEntry> {
    let mut entries = Vec::new();
    for (key, count) in current.iter() {
        entries.push(TrendEntry::new(key, count, previous.get(key)));
    }
    for (key, count) in previous.iter() {
        if !current.contains(key) {
            entries.push(TrendEntry::new(key, 0, count));
        }
    }
    entries
}

/// Entries with positive diff, largest gain first, optionally truncated
///
/// The sort is stable, so equal diffs keep first-seen order.
pub fn rising(trends: &[TrendEntry], limit: Option<usize>) -> Vec<TrendEntry> {
    let mut entries: Vec<TrendEntry> = trends.iter().filter(|t| t.diff > 0).cloned().collect();
    entries.sort_by_key(|t| std::cmp::Reverse(t.diff));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

/// Entries with negative diff, largest drop first, optionally truncated
pub fn falling(trends: &[TrendEntry], limit: Option<usize>) -> Vec<TrendEntry> {
    let mut entries: Vec<TrendEntry> = trends.iter().filter(|t| t.diff < 0).cloned().collect();
    entries.sort_by_key(|t| t.diff);
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

/// Keys present in `current` but absent from `previous`
///
/// Callers must only use this when the previous window actually contained
/// items; with an empty previous window every current key would be "new",
/// which the report suppresses.
pub fn new_keys(current: &KeyCounter, previous: &KeyCounter) -> Vec<String> {
    current
        .keys()
        .filter(|key| !previous.contains(key))
        .map(str::to_string)
        .collect()
}
