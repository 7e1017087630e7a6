// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Relationship topology: Ingress → Service → Pod graphs partitioned by
//! namespace, with computed positions.
//!
//! A graph is a pure function of its three input collections. Each call
//! builds a fresh [`TopologyGraph`]; nothing is cached between calls.

pub mod builder;
mod layout;

use serde::Serialize;
use serde_json::Value;

use crate::provider::NavigationTarget;
use crate::resource::ResourceIdentity;

pub use builder::{backend_service_names, build_graph, service_selector, GraphBuilder};

/// Namespace bucket used for records that carry none.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Visual kind of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Ingress,
    Service,
    Pod,
}

impl NodeKind {
    /// Prefix used in node ids.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ingress => "ingress",
            Self::Service => "svc",
            Self::Pod => "pod",
        }
    }

    pub fn identity(&self) -> ResourceIdentity {
        match self {
            Self::Ingress => ResourceIdentity::ingress(),
            Self::Service => ResourceIdentity::service(),
            Self::Pod => ResourceIdentity::pod(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A record placed on the canvas. `position` is the top-left corner,
/// relative to the enclosing namespace group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub identity: ResourceIdentity,
    pub record: Value,
    pub kind: NodeKind,
    pub name: String,
    pub namespace: String,
    pub position: Position,
    pub parent_id: String,
    pub width: f64,
    pub height: f64,
}

impl GraphNode {
    pub fn navigation_target(&self) -> NavigationTarget {
        NavigationTarget {
            identity: self.identity.clone(),
            name: self.name.clone(),
            namespace: Some(self.namespace.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Container bounding every node of one namespace. `position` is absolute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceGroup {
    pub id: String,
    pub namespace: String,
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

/// Complete topology for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopologyGraph {
    pub groups: Vec<NamespaceGroup>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub width: f64,
    pub height: f64,
}

impl TopologyGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn group(&self, namespace: &str) -> Option<&NamespaceGroup> {
        self.groups.iter().find(|g| g.namespace == namespace)
    }

    pub fn nodes_in<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a GraphNode> + 'a {
        self.nodes.iter().filter(move |n| n.namespace == namespace)
    }

    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Selection event for a clicked node.
    pub fn navigation_target(&self, node_id: &str) -> Option<NavigationTarget> {
        self.node(node_id).map(GraphNode::navigation_target)
    }
}

/// `"{tag}-{namespace}-{name}"`.
pub fn node_id(kind: NodeKind, namespace: &str, name: &str) -> String {
    format!("{}-{}-{}", kind.tag(), namespace, name)
}

/// `"e-{source}-{target}"`.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("e-{}-{}", source, target)
}

/// Id of the container for `namespace`.
pub fn group_id(namespace: &str) -> String {
    format!("ns-{}", namespace)
}
