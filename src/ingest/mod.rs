//! Ingestion boundary
//!
//! The engine's input contract is an ordered sequence of
//! [`TopicItem`] records. This module produces that sequence from the two
//! shapes the upstream pipeline delivers:
//!
//! - a flat JSON array of already-flattened items ([`load_items`])
//! - raw per-email records whose classifier payload arrives either as a JSON
//!   object or as a JSON-encoded string ([`RawEmailRecord`], [`flatten`])
//!
//! The string-or-object ambiguity of the classifier payload is resolved once
//! here, as a tagged union; the analytics engine never sees it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{lenient_pairs, CategoryTag, TopicItem};

/// Errors that can occur while building the engine's item list
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read items file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in items input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of items, got {found}")]
    NotAnArray { found: &'static str },
}

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Classifier payload as delivered upstream: either already structured or
/// still JSON-encoded inside a string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AiPayload {
    Encoded(String),
    Structured(AiAnalysis),
}

impl AiPayload {
    /// Resolve to the structured form, parsing the encoded variant once
    pub fn resolve(self) -> IngestResult<AiAnalysis> {
        match self {
            Self::Structured(analysis) => Ok(analysis),
            Self::Encoded(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }
}

/// Structured classifier output for one email
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiAnalysis {
    #[serde(default)]
    pub email_typ_is_newsletter: bool,

    #[serde(default)]
    pub topics: Vec<TopicPayload>,
}

/// One classified topic inside an email
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicPayload {
    #[serde(default)]
    pub topic_name: Option<String>,

    #[serde(default)]
    pub topic_summary: Option<String>,

    #[serde(default)]
    pub topic_link: Option<String>,

    #[serde(default)]
    pub is_regulatory_update: bool,

    #[serde(default, deserialize_with = "lenient_pairs")]
    pub matched_categories_tags: Vec<CategoryTag>,
}

/// One raw email record as it leaves the mail crawler
#[derive(Debug, Clone, Deserialize)]
pub struct RawEmailRecord {
    #[serde(default)]
    pub email_id: Option<String>,

    #[serde(default)]
    pub sender: Option<String>,

    #[serde(default)]
    pub email_date: Option<String>,

    #[serde(default)]
    pub summary_general: Option<String>,

    pub ai_analysis: AiPayload,
}

/// Flatten raw email records into one item per classified topic
///
/// Non-newsletter emails are skipped entirely. Email-level fields (sender,
/// date, id, general summary) are copied onto every topic of that email.
pub fn flatten(records: Vec<RawEmailRecord>) -> IngestResult<Vec<TopicItem>> {
    let mut items = Vec::new();
    for record in records {
        let analysis = record.ai_analysis.resolve()?;
        if !analysis.email_typ_is_newsletter {
            continue;
        }
        for topic in analysis.topics {
            items.push(TopicItem {
                email_id: record.email_id.clone(),
                sender: record.sender.clone(),
                email_date: record.email_date.clone(),
                summary_general: record.summary_general.clone(),
                topic_name: topic.topic_name,
                topic_summary: topic.topic_summary,
                topic_link: topic.topic_link,
                is_regulatory_update: topic.is_regulatory_update,
                matched_categories_tags: topic.matched_categories_tags,
            });
        }
    }
    Ok(items)
}

/// Load already-flattened items from a JSON file
///
/// The top-level value must be an array; anything else is an input-validation
/// error rather than a silent skip.
pub fn load_items(path: &Path) -> IngestResult<Vec<TopicItem>> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_items(&content)
}

/// Parse a JSON document holding an array of items
pub fn parse_items(content: &str) -> IngestResult<Vec<TopicItem>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    match value {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).map_err(IngestError::from))
            .collect(),
        other => Err(IngestError::NotAnArray {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
