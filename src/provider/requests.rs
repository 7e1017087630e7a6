// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Request shapes handed to the data provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render::extract;
use crate::resource::{LabelSelector, RecordExt, ResourceIdentity};

/// Kinds whose `spec.selector.matchLabels` selects the pods they own.
const POD_OWNER_KINDS: &[&str] = &["Deployment", "ReplicaSet", "StatefulSet", "DaemonSet"];

/// List records of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    pub identity: ResourceIdentity,
    /// Plural resource name, already resolved by the caller.
    pub plural: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<String>,
}

impl ListRequest {
    pub fn new(identity: ResourceIdentity, plural: impl Into<String>) -> Self {
        Self {
            identity,
            plural: plural.into(),
            namespace: None,
            label_selector: None,
        }
    }

    /// Restrict to a namespace. Empty strings mean all namespaces.
    pub fn in_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.filter(|ns| !ns.is_empty()).map(str::to_string);
        self
    }

    pub fn with_label_selector(mut self, selector: impl Into<String>) -> Self {
        self.label_selector = Some(selector.into());
        self
    }

    pub fn pods(namespace: Option<&str>) -> Self {
        Self::new(ResourceIdentity::pod(), "pods").in_namespace(namespace)
    }

    pub fn services(namespace: Option<&str>) -> Self {
        Self::new(ResourceIdentity::service(), "services").in_namespace(namespace)
    }

    pub fn ingresses(namespace: Option<&str>) -> Self {
        Self::new(ResourceIdentity::ingress(), "ingresses").in_namespace(namespace)
    }
}

/// Fetch one record by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRequest {
    pub identity: ResourceIdentity,
    pub plural: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
}

impl GetRequest {
    pub fn new(
        identity: ResourceIdentity,
        plural: impl Into<String>,
        namespace: Option<&str>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            plural: plural.into(),
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
            name: name.into(),
        }
    }
}

/// Pod list request for the pods selected by a workload controller.
///
/// Returns `None` for kinds that do not own pods through a selector, and for
/// owners whose `spec.selector.matchLabels` is missing, empty, or malformed.
pub fn related_pods_request(owner: &ResourceIdentity, record: &Value) -> Option<ListRequest> {
    if !POD_OWNER_KINDS.contains(&owner.kind.as_str()) {
        return None;
    }
    let selector = extract(record, "spec.selector")?;
    let selector = match LabelSelector::from_match_labels(&selector) {
        Ok(selector) if !selector.is_empty() => selector,
        Ok(_) => return None,
        Err(e) => {
            tracing::warn!(owner = %owner, name = ?record.name(), error = %e, "Malformed owner selector");
            return None;
        }
    };
    Some(ListRequest::pods(record.namespace()).with_label_selector(selector.to_query_string()))
}
