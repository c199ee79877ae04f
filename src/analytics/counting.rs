//! Per-window tag, category and regulatory counting
//!
//! All counts are counts of distinct items containing a key, never counts of
//! raw pair occurrences: duplicate pairs within one item are collapsed before
//! incrementing. Counter keys keep first-seen insertion order, which the
//! ranking steps rely on for stable tie-breaking.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::TopicItem;

/// Counter over string keys that preserves first-seen key order
#[derive(Debug, Clone, Default)]
pub struct KeyCounter {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl KeyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment a key, registering it at the end of the order on first sight
    pub fn increment(&mut self, key: &str) {
        match self.counts.entry(key.to_string()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                self.order.push(key.to_string());
                entry.insert(1);
            }
        }
    }

    /// Count for a key, 0 when absent
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(key, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order.iter().map(|key| (key.as_str(), self.get(key)))
    }

    /// Counts in first-seen key order
    pub fn counts(&self) -> Vec<u64> {
        self.order.iter().map(|key| self.get(key)).collect()
    }
}

/// Count distinct items per tag key (`"{category} → {tag}"`)
///
/// Each item increments a key at most once, no matter how often the pair is
/// repeated inside the item. Items without pairs contribute nothing.
pub fn count_tags<'a, I>(items: I) -> KeyCounter
where
    I: IntoIterator<Item = &'a TopicItem>,
{
    let mut counter = KeyCounter::new();
    for item in items {
        for key in item.distinct_tag_keys() {
            counter.increment(&key);
        }
    }
    counter
}

/// Count distinct items per category, with the same per-item dedup discipline
pub fn count_categories<'a, I>(items: I) -> KeyCounter
where
    I: IntoIterator<Item = &'a TopicItem>,
{
    let mut counter = KeyCounter::new();
    for item in items {
        for category in item.distinct_categories() {
            counter.increment(category);
        }
    }
    counter
}

/// Number of items flagged as regulatory updates
pub fn count_regulatory<'a, I>(items: I) -> u64
where
    I: IntoIterator<Item = &'a TopicItem>,
{
    items
        .into_iter()
        .filter(|item| item.is_regulatory_update)
        .count() as u64
}
