// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Loaded from a TOML file named by `TELESKOPE_CONFIG`, falling back to
//! built-in defaults. Every field is optional in the file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TELESKOPE_CONFIG";

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Geometry of the topology layout, in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Distance between adjacent rank columns.
    pub rank_gap: f64,
    /// Distance between nodes sharing a rank.
    pub node_gap: f64,
    /// Inset between a namespace container's border and its content.
    pub namespace_padding: f64,
    /// Height reserved for the namespace title.
    pub namespace_header: f64,
    /// Vertical space between stacked namespace containers.
    pub namespace_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            node_height: 60.0,
            rank_gap: 120.0,
            node_gap: 30.0,
            namespace_padding: 20.0,
            namespace_header: 40.0,
            namespace_gap: 40.0,
        }
    }
}

impl LayoutConfig {
    /// # Errors
    /// Returns `ConfigError::Invalid` for non-finite values, non-positive
    /// node sizes, or negative gaps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("layout.node_width", self.node_width)?;
        positive("layout.node_height", self.node_height)?;
        non_negative("layout.rank_gap", self.rank_gap)?;
        non_negative("layout.node_gap", self.node_gap)?;
        non_negative("layout.namespace_padding", self.namespace_padding)?;
        non_negative("layout.namespace_header", self.namespace_header)?;
        non_negative("layout.namespace_gap", self.namespace_gap)?;
        Ok(())
    }
}

/// Table rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Number of leading columns shown in summaries.
    pub quick_info_columns: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            quick_info_columns: 4,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl EngineConfig {
    /// Load from `TELESKOPE_CONFIG` if set, otherwise defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if the named file cannot be read, parsed, or validated.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// # Errors
    /// Returns `ConfigError` on I/O, parse, or validation failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading engine config");
        Self::from_toml_str(&raw)
    }

    /// # Errors
    /// Returns `ConfigError` on parse or validation failure.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::Invalid` on the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        if self.render.quick_info_columns == 0 {
            return Err(ConfigError::Invalid {
                field: "render.quick_info_columns",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {}", value),
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or greater, got {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
