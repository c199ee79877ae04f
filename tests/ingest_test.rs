//! Tests for the ingestion boundary

mod common;

use std::io::Write;

use trend_scout::ingest::{flatten, load_items, parse_items, IngestError, RawEmailRecord};

#[test]
fn load_items_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "email_date": "2026-08-20T09:00:00Z",
                "sender": "news@example.com",
                "is_regulatory_update": true,
                "matched_categories_tags": [{{"category": "Compliance", "tag": "GDPR"}}]
            }},
            {{"sender": "other@example.com"}}
        ]"#
    )
    .unwrap();

    let items = load_items(file.path()).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_regulatory_update);
    assert_eq!(items[0].date_key(), "2026-08-20");
    assert!(items[1].matched_categories_tags.is_empty());
}

#[test]
fn load_items_missing_file_is_io_error() {
    let err = load_items(std::path::Path::new("/nonexistent/items.json")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}

#[test]
fn top_level_object_is_rejected() {
    let err = parse_items(r#"{"windows": {}}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("array"), "unexpected message: {message}");
}

#[test]
fn top_level_scalar_is_rejected() {
    assert!(matches!(
        parse_items("42").unwrap_err(),
        IngestError::NotAnArray { found: "a number" }
    ));
}

#[test]
fn string_encoded_classifier_payload() {
    // The upstream classifier sometimes delivers `topics` JSON-encoded
    // inside a string; the boundary resolves that exactly once
    let records: Vec<RawEmailRecord> = serde_json::from_str(
        r#"[{
            "email_id": "m7",
            "sender": "digest@example.com",
            "email_date": "2026-08-19",
            "ai_analysis": "{\"email_typ_is_newsletter\": true, \"topics\": [{\"topic_name\": \"DORA deadline\", \"is_regulatory_update\": true, \"matched_categories_tags\": [{\"category\": \"Compliance\", \"tag\": \"DORA\"}]}]}"
        }]"#,
    )
    .unwrap();

    let items = flatten(records).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].topic_name.as_deref(), Some("DORA deadline"));
    assert_eq!(items[0].sender.as_deref(), Some("digest@example.com"));
    assert!(items[0].is_regulatory_update);
    assert_eq!(items[0].distinct_tag_keys(), vec!["Compliance → DORA"]);
}

#[test]
fn flattened_items_feed_the_engine() {
    let records: Vec<RawEmailRecord> = serde_json::from_str(
        r#"[{
            "sender": "digest@example.com",
            "email_date": "2026-08-24",
            "ai_analysis": {
                "email_typ_is_newsletter": true,
                "topics": [
                    {"matched_categories_tags": [{"category": "Finance", "tag": "Tax"}]},
                    {"matched_categories_tags": [{"category": "Finance", "tag": "Tax"}]}
                ]
            }
        }]"#,
    )
    .unwrap();

    let items = flatten(records).unwrap();
    let report = trend_scout::analyze(&items, common::reference_now());

    // Two topics, two items: the engine counts items, not emails
    let week = &report.windows["7d"];
    assert_eq!(week.item_count, 2);
    assert_eq!(week.top_tags[0].count, 2);
    assert_eq!(week.sender_diversity["Finance → Tax"], 1);
}
