// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Selection events handed to the navigation sink.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource::{RecordExt, ResourceIdentity};

/// The record a user picked from a table row or graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTarget {
    pub identity: ResourceIdentity,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl NavigationTarget {
    /// Target for `record`, or `None` if it has no name.
    pub fn of_record(identity: ResourceIdentity, record: &Value) -> Option<Self> {
        Some(Self {
            identity,
            name: record.name()?.to_string(),
            namespace: record.namespace().map(str::to_string),
        })
    }
}

/// Receives selections. Fetching and showing the detail view is up to the sink.
pub trait NavigationSink {
    fn navigate(&self, target: NavigationTarget);
}
