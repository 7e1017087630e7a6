// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for path extraction.

use super::*;
use serde_json::json;

fn pod() -> Value {
    json!({
        "metadata": {
            "name": "web-0",
            "labels": {"app.kubernetes.io/name": "web"}
        },
        "status": {
            "phase": "Running",
            "conditions": [
                {"type": "Initialized", "status": "True"},
                {"type": "Ready", "status": "False"}
            ],
            "containerStatuses": [
                {"name": "app", "ready": true, "restartCount": 0},
                {"name": "sidecar", "ready": false, "restartCount": 3}
            ]
        }
    })
}

#[test]
fn test_dotted_member_access() {
    assert_eq!(extract(&pod(), "metadata.name"), Some(json!("web-0")));
    assert_eq!(extract(&pod(), "$.status.phase"), Some(json!("Running")));
}

#[test]
fn test_quoted_member_access() {
    assert_eq!(
        extract(&pod(), "metadata.labels['app.kubernetes.io/name']"),
        Some(json!("web"))
    );
}

#[test]
fn test_index_access() {
    assert_eq!(
        extract(&pod(), "status.containerStatuses[1].name"),
        Some(json!("sidecar"))
    );
    assert_eq!(
        extract(&pod(), "status.containerStatuses[-1].restartCount"),
        Some(json!(3))
    );
    assert_eq!(extract(&pod(), "status.containerStatuses[5].name"), None);
}

#[test]
fn test_wildcard_collects_matches() {
    assert_eq!(
        extract(&pod(), "status.containerStatuses[*].restartCount"),
        Some(json!([0, 3]))
    );
    assert_eq!(
        extract(&json!({"items": [{"v": 1}]}), "items[*].v"),
        Some(json!(1))
    );
}

#[test]
fn test_filter_predicate() {
    assert_eq!(
        extract(&pod(), "status.conditions[?(@.type=='Ready')].status"),
        Some(json!("False"))
    );
    assert_eq!(
        extract(&pod(), r#"status.containerStatuses[?(@.restartCount != 0)].name"#),
        Some(json!("sidecar"))
    );
    assert_eq!(
        extract(&pod(), "status.containerStatuses[?(@.ready)].name"),
        Some(json!("app"))
    );
    assert_eq!(
        extract(&pod(), "status.conditions[?(@.type=='Scheduled')].status"),
        None
    );
}

#[test]
fn test_missing_branches_yield_none() {
    assert_eq!(extract(&pod(), "spec.nodeName"), None);
    assert_eq!(extract(&pod(), "metadata.name.first"), None);
    assert_eq!(extract(&pod(), "status.phase[0]"), None);
    assert_eq!(extract(&json!(null), "metadata.name"), None);
    assert_eq!(extract(&json!([1, 2]), "metadata"), None);
}

#[test]
fn test_invalid_paths_yield_none() {
    for path in ["a..b", "a.", "a[", "a[x]", "a[?(@.x=)]", "a['open", "a[?(type=='x')]"] {
        assert_eq!(extract(&pod(), path), None, "path {:?}", path);
    }
}

#[test]
fn test_parse_errors_are_reported() {
    assert_eq!(JsonPath::parse("a..b"), Err(PathError::RecursiveDescent));
    assert!(matches!(JsonPath::parse("a[x]"), Err(PathError::InvalidBracket(_))));
    assert!(matches!(JsonPath::parse("a[0"), Err(PathError::UnterminatedBracket(_))));
}

#[test]
fn test_compiled_path_is_deterministic() {
    let path: JsonPath = "status.conditions[*].type".parse().unwrap();
    let doc = pod();
    assert_eq!(path.evaluate(&doc), path.evaluate(&doc));
    assert_eq!(path.evaluate(&doc), Some(json!(["Initialized", "Ready"])));
}
