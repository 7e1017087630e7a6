// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource identities, record accessors, and label selectors.
//!
//! Records are kept as untyped [`serde_json::Value`] documents; the shape of
//! `spec` and `status` is kind-specific and never modelled here.

pub mod catalog;
pub mod identity;
pub mod record;
pub mod selector;

pub use catalog::{catalog, categorize, ApiResourceInfo};
pub use identity::ResourceIdentity;
pub use record::{Record, RecordExt};
pub use selector::{LabelSelector, SelectorError};
