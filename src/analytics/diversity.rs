//! Sender diversity behind the leading tags
//!
//! For each of the window's top tag keys, counts how many distinct senders
//! contributed items carrying that key. Only the leading tags are evaluated;
//! the rest of the tag space is deliberately left out of the report.

use std::collections::{BTreeMap, HashSet};

use crate::models::TopicItem;

/// Distinct non-empty senders per top tag key
///
/// Items without a sender (or with an empty one) never count toward
/// diversity. Returns one entry per requested key, 0 when no sender matched.
pub fn sender_diversity<'a, I>(items: I, top_tag_keys: &[String]) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a TopicItem>,
{
    let mut senders: BTreeMap<&str, HashSet<&'a str>> = top_tag_keys
        .iter()
        .map(|key| (key.as_str(), HashSet::new()))
        .collect();

    for item in items {
        let Some(sender) = item.sender.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        for key in item.distinct_tag_keys() {
            if let Some(set) = senders.get_mut(key.as_str()) {
                set.insert(sender);
            }
        }
    }

    top_tag_keys
        .iter()
        .map(|key| {
            let count = senders.get(key.as_str()).map_or(0, |set| set.len() as u64);
            (key.clone(), count)
        })
        .collect()
}
