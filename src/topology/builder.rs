// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Graph construction from Ingress, Service, and Pod snapshots.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde_json::Value;

use super::layout::layered;
use super::{
    edge_id, group_id, node_id, GraphEdge, GraphNode, NamespaceGroup, NodeKind, Position,
    TopologyGraph, DEFAULT_NAMESPACE,
};
use crate::config::LayoutConfig;
use crate::render::extract;
use crate::resource::{LabelSelector, RecordExt};

/// Paths that may name an Ingress backend Service, across API versions.
const BACKEND_SERVICE_PATHS: &[&str] = &[
    "spec.defaultBackend.service.name",
    "spec.rules[*].http.paths[*].backend.service.name",
    "spec.backend.serviceName",
    "spec.rules[*].http.paths[*].backend.serviceName",
];

#[derive(Default)]
struct NamespaceBucket<'a> {
    ingresses: Vec<&'a Value>,
    services: Vec<&'a Value>,
    pods: Vec<&'a Value>,
}

struct LocalNode<'a> {
    id: String,
    name: &'a str,
    kind: NodeKind,
    record: &'a Value,
}

/// Build a topology with the default layout geometry.
pub fn build_graph(ingresses: &[Value], services: &[Value], pods: &[Value]) -> TopologyGraph {
    GraphBuilder::default().build(ingresses, services, pods)
}

/// Builds namespace-partitioned topology graphs.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    layout: LayoutConfig,
}

impl GraphBuilder {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Build the full graph. Namespaces are emitted in lexicographic order
    /// and stacked top to bottom.
    pub fn build(&self, ingresses: &[Value], services: &[Value], pods: &[Value]) -> TopologyGraph {
        let buckets = partition(ingresses, services, pods);
        let mut graph = TopologyGraph::default();
        let mut cursor = 0.0;

        for (namespace, bucket) in &buckets {
            let nodes = collect_nodes(namespace, bucket);
            if nodes.is_empty() {
                continue;
            }
            let edges = infer_edges(&nodes);
            tracing::debug!(
                namespace,
                nodes = nodes.len(),
                edges = edges.len(),
                "Laying out namespace"
            );

            let group = self.place_namespace(namespace, &nodes, &edges, cursor, &mut graph);
            cursor += group.height + self.layout.namespace_gap;
            graph.width = graph.width.max(group.width);
            graph.groups.push(group);
        }

        if !graph.groups.is_empty() {
            graph.height = cursor - self.layout.namespace_gap;
        }

        metrics::counter!("teleskope_graph_builds_total").increment(1);
        metrics::counter!("teleskope_graph_edges_total").increment(graph.edges.len() as u64);
        graph
    }

    /// Lay out one namespace, push its nodes and edges into `graph`, and
    /// return its container placed at `top`.
    fn place_namespace(
        &self,
        namespace: &str,
        nodes: &[LocalNode<'_>],
        edges: &[(usize, usize)],
        top: f64,
        graph: &mut TopologyGraph,
    ) -> NamespaceGroup {
        let ids: Vec<String> = nodes.iter().map(|n| n.id.clone()).collect();
        let positions = layered(&ids, edges, &self.layout);

        let (width, height) = (self.layout.node_width, self.layout.node_height);
        let min_x = positions.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = positions.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = positions.iter().map(|p| p.x + width).fold(f64::NEG_INFINITY, f64::max);
        let max_y = positions.iter().map(|p| p.y + height).fold(f64::NEG_INFINITY, f64::max);

        let padding = self.layout.namespace_padding;
        let offset_x = padding - min_x;
        let offset_y = self.layout.namespace_header + padding - min_y;
        let parent_id = group_id(namespace);

        for (node, position) in nodes.iter().zip(&positions) {
            graph.nodes.push(GraphNode {
                id: node.id.clone(),
                identity: node.kind.identity(),
                record: node.record.clone(),
                kind: node.kind,
                name: node.name.to_string(),
                namespace: namespace.to_string(),
                position: Position::new(position.x + offset_x, position.y + offset_y),
                parent_id: parent_id.clone(),
                width,
                height,
            });
        }
        graph.edges.extend(edges.iter().map(|&(source, target)| GraphEdge {
            id: edge_id(&nodes[source].id, &nodes[target].id),
            source: nodes[source].id.clone(),
            target: nodes[target].id.clone(),
        }));

        NamespaceGroup {
            id: parent_id,
            namespace: namespace.to_string(),
            position: Position::new(0.0, top),
            width: (max_x - min_x) + 2.0 * padding,
            height: (max_y - min_y) + self.layout.namespace_header + 2.0 * padding,
        }
    }
}

fn partition<'a>(
    ingresses: &'a [Value],
    services: &'a [Value],
    pods: &'a [Value],
) -> BTreeMap<&'a str, NamespaceBucket<'a>> {
    let mut buckets: BTreeMap<&str, NamespaceBucket<'_>> = BTreeMap::new();
    let namespace_of = |record: &'a Value| record.namespace().unwrap_or(DEFAULT_NAMESPACE);

    for record in ingresses {
        buckets.entry(namespace_of(record)).or_default().ingresses.push(record);
    }
    for record in services {
        buckets.entry(namespace_of(record)).or_default().services.push(record);
    }
    for record in pods {
        buckets.entry(namespace_of(record)).or_default().pods.push(record);
    }
    buckets
}

/// Nodes ordered by kind, then name. Nameless records and duplicate ids are skipped.
fn collect_nodes<'a>(namespace: &str, bucket: &NamespaceBucket<'a>) -> Vec<LocalNode<'a>> {
    let mut nodes = Vec::new();
    let mut seen = HashSet::new();

    for (kind, records) in [
        (NodeKind::Ingress, &bucket.ingresses),
        (NodeKind::Service, &bucket.services),
        (NodeKind::Pod, &bucket.pods),
    ] {
        let mut named: Vec<(&'a str, &'a Value)> = Vec::with_capacity(records.len());
        for &record in records.iter() {
            match record.name() {
                Some(name) if !name.is_empty() => named.push((name, record)),
                _ => tracing::warn!(namespace, kind = kind.tag(), "Skipping record without a name"),
            }
        }
        named.sort_by(|a, b| a.0.cmp(b.0));

        for (name, record) in named {
            let id = node_id(kind, namespace, name);
            if !seen.insert(id.clone()) {
                tracing::warn!(id = %id, "Skipping duplicate record");
                continue;
            }
            nodes.push(LocalNode {
                id,
                name,
                kind,
                record,
            });
        }
    }
    nodes
}

/// Ingress → Service by backend name, then Service → Pod by selector.
fn infer_edges(nodes: &[LocalNode<'_>]) -> Vec<(usize, usize)> {
    let services: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.kind == NodeKind::Service)
        .map(|(i, n)| (n.name, i))
        .collect();
    let mut edges = Vec::new();

    for (i, ingress) in nodes.iter().enumerate().filter(|(_, n)| n.kind == NodeKind::Ingress) {
        for backend in backend_service_names(ingress.record) {
            if let Some(&svc) = services.get(backend.as_str()) {
                edges.push((i, svc));
            }
        }
    }

    for (i, service) in nodes.iter().enumerate().filter(|(_, n)| n.kind == NodeKind::Service) {
        let Some(selector) = service_selector(service.record) else {
            continue;
        };
        for (j, pod) in nodes.iter().enumerate().filter(|(_, n)| n.kind == NodeKind::Pod) {
            if selector.matches(pod.record.labels()) {
                edges.push((i, j));
            }
        }
    }
    edges
}

/// Distinct Service names referenced as backends by an Ingress.
pub fn backend_service_names(ingress: &Value) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for path in BACKEND_SERVICE_PATHS {
        match extract(ingress, path) {
            Some(Value::String(name)) => {
                names.insert(name);
            }
            Some(Value::Array(items)) => {
                names.extend(items.into_iter().filter_map(|v| match v {
                    Value::String(name) => Some(name),
                    _ => None,
                }));
            }
            _ => {}
        }
    }
    names.retain(|n| !n.is_empty());
    names
}

/// A Service's `spec.selector`, or `None` when absent, empty, or malformed.
pub fn service_selector(service: &Value) -> Option<LabelSelector> {
    let raw = extract(service, "spec.selector").filter(|v| !v.is_null())?;
    match LabelSelector::from_map(&raw) {
        Ok(selector) if !selector.is_empty() => Some(selector),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(service = ?service.name(), error = %e, "Ignoring malformed selector");
            None
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
