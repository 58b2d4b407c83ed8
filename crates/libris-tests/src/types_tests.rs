use libris_core::{EventCategory, LogEntry, UpdateEvent};
use serde_json::json;

#[test]
fn test_category_tags_round_trip() {
    let categories = [
        EventCategory::Connection,
        EventCategory::BookCreated,
        EventCategory::BookUpdated,
        EventCategory::BookDeleted,
        EventCategory::Error,
        EventCategory::Message,
    ];
    for category in categories {
        assert_eq!(EventCategory::from_tag(category.as_str()), Some(category));
    }
}

#[test]
fn test_unknown_tag_has_no_category() {
    assert_eq!(EventCategory::from_tag("bookArchived"), None);
    assert_eq!(EventCategory::from_tag(""), None);
}

#[test]
fn test_update_event_deserializes_wire_shape() {
    let event: UpdateEvent = serde_json::from_str(
        r#"{
            "timestamp": "2025-01-14T12:30:00Z",
            "type": "bookCreated",
            "message": "New book added",
            "book_id": 42,
            "book_data": {
                "id": 42,
                "title": "The Name of the Rose",
                "author": "Umberto Eco",
                "genre": "Mystery"
            }
        }"#,
    )
    .unwrap();
    assert_eq!(event.kind, "bookCreated");
    assert_eq!(event.book_id, Some(42));
    assert_eq!(
        event.book_data.as_ref().and_then(|d| d["title"].as_str()),
        Some("The Name of the Rose")
    );
}

#[test]
fn test_update_event_tolerates_missing_optional_fields() {
    let event: UpdateEvent = serde_json::from_str(
        r#"{"timestamp":"2025-01-14T12:30:00Z","type":"connection","message":"ready"}"#,
    )
    .unwrap();
    assert_eq!(event.book_id, None);
    assert_eq!(event.book_data, None);
}

#[test]
fn test_update_event_requires_core_fields() {
    let result = serde_json::from_str::<UpdateEvent>(r#"{"type":"bookCreated"}"#);
    assert!(result.is_err());
}

#[test]
fn test_entry_from_event_uses_declared_type() {
    let event: UpdateEvent = serde_json::from_str(
        r#"{"timestamp":"2025-01-14T12:30:00Z","type":"bookUpdated","message":"changed","book_data":{"id":3}}"#,
    )
    .unwrap();
    let entry = LogEntry::from_event(event);
    assert_eq!(entry.category, "bookUpdated");
    assert_eq!(entry.timestamp, "2025-01-14T12:30:00Z");
    assert_eq!(entry.message, "changed");
    assert_eq!(entry.detail, Some(json!({"id": 3})));
}

#[test]
fn test_generic_entry_uses_payload_fields() {
    let entry = LogEntry::generic(json!({
        "timestamp": "2025-01-14T12:30:00Z",
        "message": "heartbeat",
        "book_data": {"id": 9}
    }));
    assert_eq!(entry.category, "message");
    assert_eq!(entry.timestamp, "2025-01-14T12:30:00Z");
    assert_eq!(entry.message, "heartbeat");
    assert_eq!(entry.detail, Some(json!({"id": 9})));
}

#[test]
fn test_generic_entry_from_non_object_payload() {
    let entry = LogEntry::generic(json!([1, 2, 3]));
    assert_eq!(entry.category, "message");
    assert_eq!(entry.message, "[1,2,3]");
    assert!(entry.detail.is_none());
    // No timestamp in the payload, so the entry stamps itself.
    assert!(chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
}

#[test]
fn test_pretty_detail_is_multi_line() {
    let event: UpdateEvent = serde_json::from_str(
        r#"{"timestamp":"2025-01-14T12:30:00Z","type":"bookCreated","message":"added","book_data":{"id":1,"title":"Dune"}}"#,
    )
    .unwrap();
    let pretty = LogEntry::from_event(event).pretty_detail().unwrap();
    assert!(pretty.contains("\"id\": 1"));
    assert!(pretty.contains('\n'));
}
