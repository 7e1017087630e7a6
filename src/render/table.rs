// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Row rendering for table and detail views.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::format::{format_value_at, PLACEHOLDER};
use super::path::extract;
use super::status::{classify, workload_status, StatusBadge};
use crate::profiles::{ColumnDefinition, ColumnType, ResourceProfile};
use crate::provider::NavigationTarget;
use crate::resource::ResourceIdentity;

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub header: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<NavigationTarget>,
}

/// Render a single column of `record`.
pub fn render_cell(
    column: &ColumnDefinition,
    identity: &ResourceIdentity,
    record: &Value,
    now: DateTime<Utc>,
) -> Cell {
    let value = extract(record, &column.path);

    let (text, status) = match column.column_type {
        ColumnType::EnhancedStatus => {
            let badge = workload_status(record, value.as_ref());
            (badge.label.clone(), Some(badge))
        }
        ColumnType::Status => {
            let text = format_value_at(value.as_ref(), column.column_type, now);
            let status = (text != PLACEHOLDER).then(|| classify(&text));
            (text, status)
        }
        ty => (format_value_at(value.as_ref(), ty, now), None),
    };

    let link = match column.column_type {
        ColumnType::Link => NavigationTarget::of_record(identity.clone(), record),
        _ => None,
    };

    Cell {
        header: column.header.clone(),
        text,
        status,
        link,
    }
}

/// Render every column of `profile` in display order.
pub fn render_row(profile: &ResourceProfile, record: &Value, now: DateTime<Utc>) -> Vec<Cell> {
    profile
        .columns
        .iter()
        .map(|column| render_cell(column, &profile.identity, record, now))
        .collect()
}

/// `(header, text)` pairs for the first `limit` columns.
pub fn quick_info(
    profile: &ResourceProfile,
    record: &Value,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<(String, String)> {
    profile
        .quick_info_columns(limit)
        .iter()
        .map(|column| {
            let cell = render_cell(column, &profile.identity, record, now);
            (cell.header, cell.text)
        })
        .collect()
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
