// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Value-to-display-string conversion per column type.

use chrono::{DateTime, Utc};
use serde_json::{Number, Value};

use super::path::is_truthy;
use super::status::{capitalize, UNKNOWN};
use crate::profiles::ColumnType;

/// Display string for absent values.
pub const PLACEHOLDER: &str = "-";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Format an extracted value against the current wall clock.
pub fn format_value(value: Option<&Value>, column_type: ColumnType) -> String {
    format_value_at(value, column_type, Utc::now())
}

/// Format an extracted value, measuring ages against `now`.
///
/// `None` and `null` render as [`PLACEHOLDER`] for every column type.
pub fn format_value_at(value: Option<&Value>, column_type: ColumnType, now: DateTime<Utc>) -> String {
    let value = match value {
        None | Some(Value::Null) => return PLACEHOLDER.to_string(),
        Some(v) => v,
    };

    match column_type {
        ColumnType::Age => format_age(value, now),
        ColumnType::Status => stringify(value),
        ColumnType::EnhancedStatus => match value.as_str().map(str::trim) {
            Some("") => UNKNOWN.to_string(),
            Some(phase) => capitalize(phase),
            None => stringify(value),
        },
        ColumnType::List => match value {
            Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(", "),
            other => stringify(other),
        },
        ColumnType::Boolean => {
            if is_truthy(value) {
                "Yes".to_string()
            } else {
                "No".to_string()
            }
        }
        ColumnType::Number => stringify(value),
        ColumnType::ContainerStatuses => format_container_statuses(value),
        ColumnType::Text | ColumnType::Link => stringify(value),
    }
}

/// Plain string form of a value.
///
/// Mappings render as `"<n> items"`; sequences join their elements with `,`.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(map) => format!("{} items", map.len()),
    }
}

/// Age in the largest whole unit only: `3d`, `5h`, `59m`, `12s`.
pub fn format_age_secs(secs: i64) -> String {
    let secs = secs.max(0);
    if secs >= DAY {
        format!("{}d", secs / DAY)
    } else if secs >= HOUR {
        format!("{}h", secs / HOUR)
    } else if secs >= MINUTE {
        format!("{}m", secs / MINUTE)
    } else {
        format!("{}s", secs)
    }
}

fn format_age(value: &Value, now: DateTime<Utc>) -> String {
    let Some(raw) = value.as_str() else {
        return PLACEHOLDER.to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => format_age_secs((now - ts.with_timezone(&Utc)).num_seconds()),
        Err(e) => {
            tracing::trace!(timestamp = raw, error = %e, "Unparseable age timestamp");
            PLACEHOLDER.to_string()
        }
    }
}

fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// `ready/total` over a sequence of container statuses.
fn format_container_statuses(value: &Value) -> String {
    let Some(statuses) = value.as_array() else {
        return stringify(value);
    };
    let ready = statuses
        .iter()
        .filter(|s| s.get("ready").and_then(Value::as_bool).unwrap_or(false))
        .count();
    format!("{}/{}", ready, statuses.len())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
