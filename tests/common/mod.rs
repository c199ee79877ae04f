//! Common test utilities

use trend_scout::models::{CategoryTag, TopicItem};

/// Reference "now" used across the integration tests
pub fn reference_now() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
}

/// Create an item on a given date with the given category/tag pairs
#[allow(dead_code)]
pub fn item(date: &str, pairs: &[(&str, &str)]) -> TopicItem {
    TopicItem {
        email_date: Some(date.to_string()),
        sender: Some("newsletter@example.com".to_string()),
        matched_categories_tags: pairs
            .iter()
            .map(|(category, tag)| CategoryTag::new(*category, *tag))
            .collect(),
        ..Default::default()
    }
}

/// Same as [`item`] but with an explicit sender
#[allow(dead_code)]
pub fn item_from(date: &str, sender: &str, pairs: &[(&str, &str)]) -> TopicItem {
    TopicItem {
        sender: Some(sender.to_string()),
        ..item(date, pairs)
    }
}

/// Same as [`item`] but flagged as a regulatory update
#[allow(dead_code)]
pub fn regulatory_item(date: &str, pairs: &[(&str, &str)]) -> TopicItem {
    TopicItem {
        is_regulatory_update: true,
        ..item(date, pairs)
    }
}
