// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Group/Version/Kind identity of a resource.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Literal used in lookup keys for the unnamed core API group.
pub const CORE_GROUP: &str = "core";

/// Immutable Group/Version/Kind triple.
///
/// An empty `group` denotes the core group. Two identities that differ only
/// in `""` vs `"core"` share the same [`lookup_key`](Self::lookup_key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceIdentity {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl ResourceIdentity {
    pub fn new(group: impl Into<String>, version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Identity in the core group.
    pub fn core(version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new("", version, kind)
    }

    pub fn pod() -> Self {
        Self::core("v1", "Pod")
    }

    pub fn service() -> Self {
        Self::core("v1", "Service")
    }

    pub fn ingress() -> Self {
        Self::new("networking.k8s.io", "v1", "Ingress")
    }

    /// Split an `apiVersion` string (`"apps/v1"` or `"v1"`) into an identity.
    pub fn from_api_version(api_version: &str, kind: impl Into<String>) -> Self {
        match api_version.split_once('/') {
            Some((group, version)) => Self::new(group, version, kind),
            None => Self::core(api_version, kind),
        }
    }

    /// Read `apiVersion` and `kind` off a record.
    pub fn of_record(record: &Value) -> Option<Self> {
        let api_version = record.get("apiVersion")?.as_str()?;
        let kind = record.get("kind")?.as_str()?;
        if api_version.is_empty() || kind.is_empty() {
            return None;
        }
        Some(Self::from_api_version(api_version, kind))
    }

    /// Group name with the empty core group rewritten to `"core"`.
    pub fn normalized_group(&self) -> &str {
        if self.group.is_empty() {
            CORE_GROUP
        } else {
            &self.group
        }
    }

    pub fn is_core(&self) -> bool {
        self.normalized_group() == CORE_GROUP
    }

    /// `"{group-or-core}/{version}/{kind}"`.
    pub fn lookup_key(&self) -> String {
        format!("{}/{}/{}", self.normalized_group(), self.version, self.kind)
    }

    /// `apiVersion` as it appears on a record.
    pub fn api_version(&self) -> String {
        if self.is_core() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lookup_key())
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
