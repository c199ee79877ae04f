// Core data structures for the trend-scout engine

use serde::{Deserialize, Deserializer, Serialize};

/// One category/tag pair assigned to a topic by the upstream classifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CategoryTag {
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tag: String,
}

impl CategoryTag {
    /// Create a new pair
    pub fn new(category: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            tag: tag.into(),
        }
    }

    /// Tag key identifying this pair: `"{category} → {tag}"`
    pub fn key(&self) -> String {
        format!("{} → {}", self.category, self.tag)
    }
}

/// One classified newsletter topic as delivered by the ingestion pipeline
///
/// Items are immutable inputs to the engine. Only `email_date`, `sender`,
/// `is_regulatory_update` and `matched_categories_tags` participate in the
/// analysis; the remaining fields are carried through from ingestion for
/// downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TopicItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,

    /// Sender address of the originating newsletter
    #[serde(default)]
    pub sender: Option<String>,

    /// Date-or-datetime string; only the date portion is significant
    #[serde(default)]
    pub email_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_general: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_link: Option<String>,

    /// Whether this topic was flagged as a regulatory/compliance change
    #[serde(default)]
    pub is_regulatory_update: bool,

    /// Category/tag pairs; may contain duplicates within one item.
    /// A missing, null, or non-array value deserializes to empty.
    #[serde(default, deserialize_with = "lenient_pairs")]
    pub matched_categories_tags: Vec<CategoryTag>,
}

impl TopicItem {
    /// Date portion of `email_date` (everything before `'T'`), or `""` when
    /// the date is missing. ISO dates compare lexicographically the same as
    /// chronologically, so window filtering works on this key directly.
    pub fn date_key(&self) -> &str {
        let date = self.email_date.as_deref().unwrap_or("");
        date.find('T').map_or(date, |idx| &date[..idx])
    }

    /// Distinct tag keys of this item in first-seen order
    ///
    /// Duplicate `(category, tag)` pairs within the item collapse to one key,
    /// so an item contributes at most 1 to any tag count.
    pub fn distinct_tag_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for pair in &self.matched_categories_tags {
            let key = pair.key();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Distinct categories of this item in first-seen order
    pub fn distinct_categories(&self) -> Vec<&str> {
        let mut categories = Vec::new();
        for pair in &self.matched_categories_tags {
            if !categories.contains(&pair.category.as_str()) {
                categories.push(pair.category.as_str());
            }
        }
        categories
    }
}

/// Accept anything the upstream classifier emits for the pair list: a proper
/// array (malformed elements dropped), or any other JSON value as empty.
pub(crate) fn lenient_pairs<'de, D>(deserializer: D) -> Result<Vec<CategoryTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
