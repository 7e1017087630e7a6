// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Categorical status classification.
//!
//! Branch order is terminating, pending, failed, healthy, unknown. A
//! terminating status also matches the pending vocabulary; the terminating
//! branch is evaluated first and keeps its own glyph.

use serde::Serialize;
use serde_json::Value;

use crate::resource::RecordExt;

const PENDING: &[&str] = &["pending", "progressing", "waiting", "containercreating"];
const FAILED: &[&str] = &[
    "failed",
    "error",
    "crashloopbackoff",
    "imagepullbackoff",
    "false",
    "terminated",
];
const HEALTHY: &[&str] = &["running", "active", "healthy", "ready", "true", "succeeded"];

/// Display label forced onto records carrying a deletion marker.
pub const TERMINATING: &str = "Terminating";

/// Label used when a workload reports no phase.
pub const UNKNOWN: &str = "Unknown";

/// Coarse health bucket of a status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Healthy,
    Pending,
    Failed,
    Unknown,
}

impl StatusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Healthy => "✓",
            Self::Pending => "⟳",
            Self::Failed => "✕",
            Self::Unknown => "?",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified status ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub label: String,
    pub category: StatusCategory,
    /// Terminating sub-state of [`StatusCategory::Pending`].
    pub terminating: bool,
    pub glyph: &'static str,
    pub class_name: &'static str,
}

impl StatusBadge {
    fn new(label: String, category: StatusCategory, terminating: bool) -> Self {
        let (glyph, class_name) = if terminating {
            ("⏸", "status-terminating")
        } else {
            let class_name = match category {
                StatusCategory::Healthy => "status-healthy",
                StatusCategory::Pending => "status-pending",
                StatusCategory::Failed => "status-failed",
                StatusCategory::Unknown => "status-unknown",
            };
            (category.glyph(), class_name)
        };
        Self {
            label,
            category,
            terminating,
            glyph,
            class_name,
        }
    }
}

/// Lower-case and strip spaces and hyphens.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ' ' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Classify a raw status string. The label keeps the raw text.
pub fn classify(raw: &str) -> StatusBadge {
    let normalized = normalize(raw);
    let label = raw.to_string();

    if normalized.starts_with("terminating") {
        return StatusBadge::new(label, StatusCategory::Pending, true);
    }
    let category = if PENDING.contains(&normalized.as_str()) {
        StatusCategory::Pending
    } else if FAILED.contains(&normalized.as_str()) {
        StatusCategory::Failed
    } else if HEALTHY.contains(&normalized.as_str()) {
        StatusCategory::Healthy
    } else {
        StatusCategory::Unknown
    };
    StatusBadge::new(label, category, false)
}

/// First letter upper-case, remainder lower-case.
pub fn capitalize(phase: &str) -> String {
    let mut chars = phase.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Status of a unit-of-work record such as a Pod.
///
/// A deletion marker forces `Terminating` whatever the phase says. Otherwise
/// the phase is capitalized and classified; a missing or empty phase reads
/// as `Unknown`.
pub fn workload_status(record: &Value, phase: Option<&Value>) -> StatusBadge {
    if record.is_deleting() {
        return classify(TERMINATING);
    }
    match phase.and_then(Value::as_str).map(str::trim) {
        Some(phase) if !phase.is_empty() => classify(&capitalize(phase)),
        _ => classify(UNKNOWN),
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
