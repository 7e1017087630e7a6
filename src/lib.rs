// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Teleskope core: resource profile resolution, table rendering, and
//! relationship topology for schema-less Kubernetes-style records.
//!
//! Every entry point is a synchronous, pure computation over a snapshot of
//! records handed over by a data provider. Nothing here performs I/O except
//! the optional config loader and the provider seam in [`provider`].

pub mod config;
pub mod profiles;
pub mod provider;
pub mod render;
pub mod resource;
pub mod telemetry;
pub mod topology;

pub use config::{ConfigError, EngineConfig, LayoutConfig, RenderConfig};
pub use profiles::{
    resolve, ActionDefinition, ActionType, ColumnDefinition, ColumnType, ProfileResolver,
    ResourceProfile,
};
pub use provider::{NavigationSink, NavigationTarget, ProviderError, ResourceProvider};
pub use render::{extract, format_value, render_row, Cell, StatusBadge, StatusCategory};
pub use resource::{LabelSelector, Record, ResourceIdentity};
pub use topology::{build_graph, GraphEdge, GraphNode, NamespaceGroup, NodeKind, TopologyGraph};
