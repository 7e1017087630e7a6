// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource profiles: per-kind column layouts and supported actions.

pub mod native;
pub mod resolver;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resource::ResourceIdentity;

pub use resolver::{resolve, NativeProfiles, ProfileResolver, ProfileSource};

/// Semantic type of a column, selecting its formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    Text,
    Link,
    Age,
    Status,
    EnhancedStatus,
    List,
    Boolean,
    Number,
    ContainerStatuses,
}

/// One column of a table view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub header: String,
    /// Path expression evaluated against the record.
    pub path: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl ColumnDefinition {
    pub fn new(header: impl Into<String>, path: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            header: header.into(),
            path: path.into(),
            column_type,
            width: None,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

/// Kind of capability an action exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionType {
    View,
    Edit,
    Delete,
    Terminal,
    OpenUrl,
    Custom,
}

/// A capability offered for records of a kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDefinition {
    pub label: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Path expression yielding the URL target, for `open-url` actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
}

impl ActionDefinition {
    pub fn new(label: impl Into<String>, action_type: ActionType) -> Self {
        Self {
            label: label.into(),
            action_type,
            icon: None,
            url_path: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_url_path(mut self, path: impl Into<String>) -> Self {
        self.url_path = Some(path.into());
        self
    }
}

/// Column layout and capabilities for one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceProfile {
    pub identity: ResourceIdentity,
    pub columns: Vec<ColumnDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionDefinition>>,
}

/// Validation error for profiles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Profile for {0} has no columns")]
    NoColumns(String),
    #[error("Column '{header}' of {identity} has an empty path")]
    EmptyPath { identity: String, header: String },
}

impl ResourceProfile {
    /// Name / Namespace / Age fallback used for kinds without a dedicated profile.
    pub fn generic(identity: ResourceIdentity) -> Self {
        Self {
            identity,
            columns: vec![
                ColumnDefinition::new("Name", "metadata.name", ColumnType::Link),
                ColumnDefinition::new("Namespace", "metadata.namespace", ColumnType::Text),
                ColumnDefinition::new("Age", "metadata.creationTimestamp", ColumnType::Age),
            ],
            actions: None,
        }
    }

    /// Whether an action of `action_type` is offered.
    pub fn supports(&self, action_type: ActionType) -> bool {
        self.actions
            .as_deref()
            .is_some_and(|actions| actions.iter().any(|a| a.action_type == action_type))
    }

    /// Leading columns used for summaries.
    pub fn quick_info_columns(&self, limit: usize) -> &[ColumnDefinition] {
        &self.columns[..limit.min(self.columns.len())]
    }

    /// Validate the profile.
    ///
    /// # Errors
    /// Returns `ProfileError` if there are no columns or a column path is empty.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.columns.is_empty() {
            return Err(ProfileError::NoColumns(self.identity.lookup_key()));
        }
        if let Some(column) = self.columns.iter().find(|c| c.path.trim().is_empty()) {
            return Err(ProfileError::EmptyPath {
                identity: self.identity.lookup_key(),
                header: column.header.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod tests;
