//! Report assembly
//!
//! Runs every analysis component against each comparison window and composes
//! the final trend report. Field names and nesting are a binding contract:
//! the downstream summarizer and dashboard read specific paths such as
//! `windows["7d"].top_tags`.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::concentration::{self, Concentration};
use super::cooccurrence::{co_occurrences, PairCount};
use super::counting::{count_categories, count_regulatory, count_tags, KeyCounter};
use super::diversity::sender_diversity;
use super::trends::{compute_trends, falling, new_keys, rising, TrendEntry};
use super::windows::comparison_windows;
use crate::models::TopicItem;

/// Cap on ranked tag lists (top tags, rising/falling tags, sender diversity
/// scope). Category trend lists are intentionally uncapped, mirroring the
/// report contract.
pub const TOP_TAG_LIMIT: usize = 10;

/// Cap on the co-occurring pair list
pub const TOP_PAIR_LIMIT: usize = 10;

/// One entry of a ranked count list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: u64,
}

/// Regulatory-update counts for one window
///
/// `previous_count` is `None` when no comparison period exists or the
/// previous window held no items at all; a previous window with items but no
/// regulatory updates reports `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatorySummary {
    pub count: u64,
    pub previous_count: Option<u64>,
}

/// Full analysis of one comparison window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowAnalysis {
    pub item_count: usize,
    pub unique_tags: usize,
    pub unique_categories: usize,
    pub top_tags: Vec<TagCount>,
    pub top_categories: Vec<TagCount>,
    pub rising_tags: Vec<TrendEntry>,
    pub falling_tags: Vec<TrendEntry>,
    pub rising_categories: Vec<TrendEntry>,
    pub falling_categories: Vec<TrendEntry>,
    pub new_tags: Vec<String>,
    pub co_occurrences: Vec<PairCount>,
    pub concentration: Concentration,
    pub sender_diversity: BTreeMap<String, u64>,
    pub regulatory: RegulatorySummary,
}

/// The final trend report handed to the summarization and rendering
/// collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Start of the 7-day window
    pub period_start: String,

    /// End of the 7-day window
    pub period_end: String,

    pub generated_at: DateTime<Utc>,
    pub total_items_loaded: usize,
    pub windows: BTreeMap<String, WindowAnalysis>,
}

/// Ranked counts, stable-sorted descending so ties keep first-seen order
fn ranked(counter: &KeyCounter, limit: Option<usize>) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = counter
        .iter()
        .map(|(name, count)| TagCount {
            name: name.to_string(),
            count,
        })
        .collect();
    counts.sort_by_key(|t| std::cmp::Reverse(t.count));
    if let Some(limit) = limit {
        counts.truncate(limit);
    }
    counts
}

fn analyze_window(current: &[&TopicItem], previous: &[&TopicItem]) -> WindowAnalysis {
    let tags_current = count_tags(current.iter().copied());
    let tags_previous = count_tags(previous.iter().copied());
    let cats_current = count_categories(current.iter().copied());
    let cats_previous = count_categories(previous.iter().copied());

    let tag_trends = compute_trends(&tags_current, &tags_previous);
    let cat_trends = compute_trends(&cats_current, &cats_previous);

    // Without a populated comparison period every current tag would look new
    let new_tags = if previous.is_empty() {
        Vec::new()
    } else {
        new_keys(&tags_current, &tags_previous)
    };

    let top_tags = ranked(&tags_current, Some(TOP_TAG_LIMIT));
    let top_tag_keys: Vec<String> = top_tags.iter().map(|t| t.name.clone()).collect();

    WindowAnalysis {
        item_count: current.len(),
        unique_tags: tags_current.len(),
        unique_categories: cats_current.len(),
        sender_diversity: sender_diversity(current.iter().copied(), &top_tag_keys),
        top_tags,
        top_categories: ranked(&cats_current, None),
        rising_tags: rising(&tag_trends, Some(TOP_TAG_LIMIT)),
        falling_tags: falling(&tag_trends, Some(TOP_TAG_LIMIT)),
        rising_categories: rising(&cat_trends, None),
        falling_categories: falling(&cat_trends, None),
        new_tags,
        co_occurrences: co_occurrences(current.iter().copied(), TOP_PAIR_LIMIT),
        concentration: concentration::measure(&tags_current),
        regulatory: RegulatorySummary {
            count: count_regulatory(current.iter().copied()),
            previous_count: if previous.is_empty() {
                None
            } else {
                Some(count_regulatory(previous.iter().copied()))
            },
        },
    }
}

/// Run the full windowed analysis over one reporting cycle's items
///
/// `now` is injected by the caller; the engine never reads a system clock, so
/// identical inputs always produce an identical report. All accumulators are
/// scoped to a single window of a single invocation.
pub fn analyze(items: &[TopicItem], now: NaiveDate) -> TrendReport {
    // Ascending date order fixes the first-seen order of every counter key,
    // which ranking tie-breaks depend on
    let mut sorted: Vec<&TopicItem> = items.iter().collect();
    sorted.sort_by(|a, b| a.date_key().cmp(b.date_key()));

    let mut windows = BTreeMap::new();
    let mut period_start = String::new();
    let mut period_end = String::new();

    for window in comparison_windows(now) {
        let current: Vec<&TopicItem> = sorted
            .iter()
            .copied()
            .filter(|item| window.current.contains(item.date_key()))
            .collect();
        let previous: Vec<&TopicItem> = window
            .previous
            .as_ref()
            .map(|range| {
                sorted
                    .iter()
                    .copied()
                    .filter(|item| range.contains(item.date_key()))
                    .collect()
            })
            .unwrap_or_default();

        if window.name == "7d" {
            period_start = window.current.from.clone();
            period_end = window.current.to.clone();
        }

        tracing::debug!(
            window = window.name,
            current_items = current.len(),
            previous_items = previous.len(),
            "analyzing window"
        );

        windows.insert(window.name.to_string(), analyze_window(&current, &previous));
    }

    TrendReport {
        period_start,
        period_end,
        generated_at: now.and_time(NaiveTime::MIN).and_utc(),
        total_items_loaded: items.len(),
        windows,
    }
}
