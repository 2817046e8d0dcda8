//! Filters supplied as configuration data.
//!
//! Filters loaded through `serde` are classified by shape rather than tagged,
//! so these tests pin down how untyped data turns into filters and how the
//! loaded filters behave once applied.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use sift::{sift, Filter, ObjectFilter};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

#[derive(Deserialize)]
struct LogConfig {
    #[serde(default)]
    fields: Vec<Filter>,
}

fn event() -> Map<String, Value> {
    object(json!({
        "requestId": "r-1",
        "user": { "id": 42, "email": "a@example.com", "password": "hunter2" },
        "headers": { "xTraceId": "t-9", "authorization": "Bearer abc", "xRegion": "eu" },
        "body": [1, 2, 3]
    }))
}

#[test]
fn test_config_driven_log_whitelist() {
    let config: LogConfig = serde_json::from_str(
        r#"{
            "fields": [
                ["requestId", "body"],
                { "user": ["id"] },
                { "headers": { "pattern": "^x", "filters": [true] } }
            ]
        }"#,
    )
    .unwrap();

    let result = sift(&event(), &config.fields);
    assert_eq!(
        Value::Object(result),
        json!({
            "requestId": "r-1",
            "body": [1, 2, 3],
            "user": { "id": 42 },
            "headers": { "xTraceId": "t-9", "xRegion": "eu" }
        })
    );
}

#[test]
fn test_missing_fields_selects_nothing() {
    let config: LogConfig = serde_json::from_str("{}").unwrap();
    assert!(sift(&event(), &config.fields).is_empty());
}

#[test]
fn test_true_at_top_level_keeps_everything() {
    let filters: Vec<Filter> = serde_json::from_str(r#"[["requestId"], true]"#).unwrap();
    assert_eq!(sift(&event(), &filters), event());
}

#[test]
fn test_unrecognized_entries_are_ignored() {
    let filters: Vec<Filter> =
        serde_json::from_str(r#"["requestId", 5, null, [], ["requestId"]]"#).unwrap();
    assert_eq!(
        Value::Object(sift(&event(), &filters)),
        json!({ "requestId": "r-1" })
    );
}

#[test]
fn test_unrecognized_nested_entry_leaves_empty_object() {
    let filters: Vec<Filter> = serde_json::from_str(r#"[{ "user": 1, "requestId": 1 }]"#).unwrap();
    assert_eq!(Value::Object(sift(&event(), &filters)), json!({ "user": {} }));
}

#[test]
fn test_top_level_matcher_from_config() {
    let filters: Vec<Filter> =
        serde_json::from_str(r#"[{ "pattern": "^(user|headers)$", "filters": [["id", "xRegion"]] }]"#)
            .unwrap();
    assert_eq!(
        Value::Object(sift(&event(), &filters)),
        json!({ "user": { "id": 42 }, "headers": { "xRegion": "eu" } })
    );
}

#[test]
fn test_invalid_pattern_is_treated_as_object_filter() {
    // Not a matcher, so `pattern` and `filters` are looked up as source keys.
    let source = object(json!({ "pattern": { "a": 1 }, "filters": { "b": 2 } }));
    let filters: Vec<Filter> =
        serde_json::from_str(r#"[{ "pattern": "(", "filters": [] }]"#).unwrap();
    assert_eq!(
        Value::Object(sift(&source, &filters)),
        json!({ "pattern": {}, "filters": {} })
    );
}

#[test]
fn test_serialized_filters_reload_identically() {
    let original = Filter::from(
        ObjectFilter::new()
            .field("user", ["id"])
            .field("headers", sift::KeyMatcher::from_pattern("^x", [Filter::All]).unwrap()),
    );
    let text = serde_json::to_string(&original).unwrap();
    let reloaded: Filter = serde_json::from_str(&text).unwrap();
    assert_eq!(reloaded, original);
    assert_eq!(sift(&event(), &[reloaded]), sift(&event(), &[original]));
}

#[test]
fn test_malformed_text_is_a_deserialize_error() {
    assert!(serde_json::from_str::<Filter>("{ not json").is_err());
}
