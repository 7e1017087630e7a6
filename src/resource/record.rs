// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Accessors over untyped record documents.

use serde_json::{Map, Value};

/// One resource instance as handed over by the data provider.
pub type Record = Value;

/// Read-only views of the well-known `metadata` fields.
///
/// Every accessor tolerates missing or mistyped branches and returns `None`.
pub trait RecordExt {
    fn metadata(&self) -> Option<&Map<String, Value>>;

    fn name(&self) -> Option<&str> {
        self.metadata()?.get("name")?.as_str()
    }

    fn namespace(&self) -> Option<&str> {
        self.metadata()?
            .get("namespace")?
            .as_str()
            .filter(|ns| !ns.is_empty())
    }

    fn labels(&self) -> Option<&Map<String, Value>> {
        self.metadata()?.get("labels")?.as_object()
    }

    fn annotations(&self) -> Option<&Map<String, Value>> {
        self.metadata()?.get("annotations")?.as_object()
    }

    /// Whether the record carries a deletion marker.
    fn is_deleting(&self) -> bool {
        self.metadata()
            .and_then(|m| m.get("deletionTimestamp"))
            .is_some_and(|ts| !ts.is_null())
    }
}

impl RecordExt for Value {
    fn metadata(&self) -> Option<&Map<String, Value>> {
        self.get("metadata")?.as_object()
    }
}
