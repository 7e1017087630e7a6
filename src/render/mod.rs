// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Cell rendering: path extraction, value formatting, status classification.

pub mod format;
pub mod path;
pub mod status;
pub mod table;

pub use format::{format_age_secs, format_value, format_value_at, stringify, PLACEHOLDER};
pub use path::{extract, JsonPath, PathError};
pub use status::{classify, workload_status, StatusBadge, StatusCategory};
pub use table::{quick_info, render_cell, render_row, Cell};
