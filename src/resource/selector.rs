// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Equality-based label selectors (`matchLabels` semantics).
//!
//! Set-based expressions (`matchExpressions`) are not interpreted.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a selector document could not be read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    #[error("Selector is not a mapping")]
    NotAMap,
    #[error("Selector value for key '{0}' is not a string")]
    NonStringValue(String),
}

/// Required label key/value pairs, ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LabelSelector {
    match_labels: BTreeMap<String, String>,
}

impl LabelSelector {
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            match_labels: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Read a flat `{key: value}` mapping, as found in a Service's `spec.selector`.
    ///
    /// # Errors
    /// Returns `SelectorError` if the value is not a mapping or holds non-string values.
    pub fn from_map(value: &Value) -> Result<Self, SelectorError> {
        let map = value.as_object().ok_or(SelectorError::NotAMap)?;
        Self::from_object(map)
    }

    /// Read a `{matchLabels: {...}}` selector, as found on workload controllers.
    ///
    /// A selector without `matchLabels` yields an empty selector.
    ///
    /// # Errors
    /// Returns `SelectorError` if either level is malformed.
    pub fn from_match_labels(value: &Value) -> Result<Self, SelectorError> {
        let map = value.as_object().ok_or(SelectorError::NotAMap)?;
        match map.get("matchLabels") {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(labels) => Self::from_map(labels),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Result<Self, SelectorError> {
        let mut match_labels = BTreeMap::new();
        for (key, value) in map {
            let value = value
                .as_str()
                .ok_or_else(|| SelectorError::NonStringValue(key.clone()))?;
            match_labels.insert(key.clone(), value.to_string());
        }
        Ok(Self { match_labels })
    }

    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.match_labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.match_labels
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Subset test: every selector key is present in `labels` with an equal
    /// string value. An empty selector matches vacuously; callers that treat
    /// "no selector" as "selects nothing" must check [`is_empty`](Self::is_empty).
    pub fn matches(&self, labels: Option<&Map<String, Value>>) -> bool {
        let Some(labels) = labels else {
            return self.is_empty();
        };
        self.match_labels
            .iter()
            .all(|(key, want)| labels.get(key).and_then(Value::as_str) == Some(want.as_str()))
    }

    /// Render as a list-request label selector, `k1=v1,k2=v2`.
    pub fn to_query_string(&self) -> String {
        self.match_labels
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
