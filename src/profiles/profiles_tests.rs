// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for profile types and the native table.

use super::native::native_table;
use super::*;

#[test]
fn test_generic_profile_shape() {
    let profile = ResourceProfile::generic(ResourceIdentity::new("example.io", "v1", "Widget"));
    let headers: Vec<&str> = profile.columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(headers, vec!["Name", "Namespace", "Age"]);
    assert_eq!(profile.columns[0].column_type, ColumnType::Link);
    assert_eq!(profile.columns[2].column_type, ColumnType::Age);
    assert!(profile.actions.is_none());
    assert!(profile.validate().is_ok());
}

#[test]
fn test_native_profiles_are_valid() {
    assert!(!native_table().is_empty());
    for (key, profile) in native_table() {
        assert!(profile.validate().is_ok(), "invalid profile {}", key);
        assert_eq!(key, &profile.identity.lookup_key());
        assert_eq!(profile.columns[0].header, "Name", "{}", key);
    }
}

#[test]
fn test_native_paths_parse() {
    for profile in native_table().values() {
        for column in &profile.columns {
            assert!(
                crate::render::JsonPath::parse(&column.path).is_ok(),
                "{} column {} has bad path {}",
                profile.identity,
                column.header,
                column.path
            );
        }
    }
}

#[test]
fn test_supports_actions() {
    let pod = &native_table()["core/v1/Pod"];
    assert!(pod.supports(ActionType::Terminal));
    assert!(pod.supports(ActionType::Delete));
    assert!(!pod.supports(ActionType::OpenUrl));

    let generic = ResourceProfile::generic(ResourceIdentity::pod());
    assert!(!generic.supports(ActionType::View));
}

#[test]
fn test_quick_info_columns_clamp() {
    let profile = ResourceProfile::generic(ResourceIdentity::pod());
    assert_eq!(profile.quick_info_columns(2).len(), 2);
    assert_eq!(profile.quick_info_columns(10).len(), 3);
    assert!(profile.quick_info_columns(0).is_empty());
}

#[test]
fn test_validate_rejects_empty_profiles() {
    let mut profile = ResourceProfile::generic(ResourceIdentity::pod());
    profile.columns[1].path = " ".to_string();
    assert!(matches!(profile.validate(), Err(ProfileError::EmptyPath { .. })));

    profile.columns.clear();
    assert_eq!(
        profile.validate(),
        Err(ProfileError::NoColumns("core/v1/Pod".to_string()))
    );
}

#[test]
fn test_column_type_serde_names() {
    let column = ColumnDefinition::new("Ready", "status.containerStatuses", ColumnType::ContainerStatuses);
    let json = serde_json::to_string(&column).unwrap();
    assert!(json.contains("\"type\":\"container-statuses\""));
    assert!(!json.contains("width"));

    let parsed: ColumnDefinition = serde_json::from_str(
        r#"{"header":"Status","path":"status.phase","type":"enhanced-status","width":120}"#,
    )
    .unwrap();
    assert_eq!(parsed.column_type, ColumnType::EnhancedStatus);
    assert_eq!(parsed.width, Some(120));
}
