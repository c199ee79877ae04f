//! Tag co-occurrence analysis
//!
//! Finds tag keys that appear together within the same item. Pairs are
//! unordered: the canonical label sorts the two keys lexicographically and
//! joins them with `" + "`.

use serde::{Deserialize, Serialize};

use super::counting::KeyCounter;
use crate::models::TopicItem;

/// One co-occurring tag pair and the number of items containing both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    pub pair: String,
    pub count: u64,
}

/// Top co-occurring tag pairs within a window, by count descending
///
/// Items contribute one increment per distinct unordered pair of their
/// deduplicated tag keys; items with fewer than 2 distinct keys contribute
/// nothing. The sort is stable, so equal counts keep first-seen pair order.
pub fn co_occurrences<'a, I>(items: I, limit: usize) -> Vec<PairCount>
where
    I: IntoIterator<Item = &'a TopicItem>,
{
    let mut pairs = KeyCounter::new();
    for item in items {
        let keys = item.distinct_tag_keys();
        if keys.len() < 2 {
            continue;
        }
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                let (first, second) = if keys[i] <= keys[j] {
                    (&keys[i], &keys[j])
                } else {
                    (&keys[j], &keys[i])
                };
                pairs.increment(&format!("{first} + {second}"));
            }
        }
    }

    let mut counts: Vec<PairCount> = pairs
        .iter()
        .map(|(pair, count)| PairCount {
            pair: pair.to_string(),
            count,
        })
        .collect();
    counts.sort_by_key(|p| std::cmp::Reverse(p.count));
    counts.truncate(limit);
    counts
}
