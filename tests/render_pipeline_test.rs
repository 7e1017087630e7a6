//! End-to-end tests over the public API: profile resolution, row
//! rendering, and topology construction from one snapshot.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use teleskope_core::render::{quick_info, StatusCategory};
use teleskope_core::resource::catalog::{catalog, ApiResourceInfo};
use teleskope_core::{build_graph, render_row, resolve, EngineConfig, ResourceIdentity};

fn snapshot() -> (Vec<Value>, Vec<Value>, Vec<Value>) {
    let ingresses = vec![json!({
        "apiVersion": "networking.k8s.io/v1",
        "kind": "Ingress",
        "metadata": {"name": "shop", "namespace": "shop", "creationTimestamp": "2026-10-10T12:00:00Z"},
        "spec": {
            "ingressClassName": "nginx",
            "rules": [
                {"host": "shop.example.com", "http": {"paths": [
                    {"path": "/", "backend": {"service": {"name": "frontend"}}},
                    {"path": "/api", "backend": {"service": {"name": "api"}}}
                ]}}
            ]
        }
    })];
    let services = vec![
        json!({
            "apiVersion": "v1",
            "kind": "Service",
            "metadata": {"name": "frontend", "namespace": "shop"},
            "spec": {"type": "ClusterIP", "clusterIP": "10.0.0.10", "selector": {"app": "frontend"},
                     "ports": [{"port": 80}, {"port": 443}]}
        }),
        json!({
            "apiVersion": "v1",
            "kind": "Service",
            "metadata": {"name": "api", "namespace": "shop"},
            "spec": {"selector": {"app": "api"}, "ports": [{"port": 8080}]}
        }),
        json!({
            "apiVersion": "v1",
            "kind": "Service",
            "metadata": {"name": "kubernetes", "namespace": "default"},
            "spec": {"clusterIP": "10.0.0.1"}
        }),
    ];
    let pods = vec![
        json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {"name": "frontend-1", "namespace": "shop", "labels": {"app": "frontend"}},
            "status": {"phase": "Running"}
        }),
        json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {"name": "api-1", "namespace": "shop", "labels": {"app": "api"}},
            "status": {"phase": "Pending"}
        }),
        json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {"name": "api-2", "namespace": "shop", "labels": {"app": "api"},
                         "deletionTimestamp": "2026-10-16T11:00:00Z"},
            "status": {"phase": "Running"}
        }),
    ];
    (ingresses, services, pods)
}

#[test]
fn test_full_topology() {
    let (ingresses, services, pods) = snapshot();
    let graph = build_graph(&ingresses, &services, &pods);

    let namespaces: Vec<&str> = graph.groups.iter().map(|g| g.namespace.as_str()).collect();
    assert_eq!(namespaces, vec!["default", "shop"]);
    assert_eq!(graph.nodes.len(), 7);
    assert_eq!(graph.edges.len(), 5);
    assert_eq!(graph.edges_from("svc-shop-api").count(), 2);
    assert_eq!(graph.nodes_in("default").count(), 1);

    let shop = graph.group("shop").unwrap();
    let default = graph.group("default").unwrap();
    assert!(shop.position.y > default.position.y);

    let serialized = serde_json::to_value(&graph).unwrap();
    assert_eq!(serialized["nodes"][0]["kind"], "service");
    assert!(serialized["nodes"][0]["parentId"].is_string());
}

#[test]
fn test_rows_for_snapshot() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    let (ingresses, services, pods) = snapshot();

    let ingress_profile = resolve(&ResourceIdentity::of_record(&ingresses[0]).unwrap());
    let row = render_row(&ingress_profile, &ingresses[0], now);
    let texts: Vec<&str> = row.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["shop", "shop", "nginx", "shop.example.com", "-", "6d"]);

    let service_profile = resolve(&ResourceIdentity::of_record(&services[0]).unwrap());
    let row = render_row(&service_profile, &services[0], now);
    assert_eq!(row[4].text, "80, 443");
    assert_eq!(row[5].text, "1 items");

    let pod_profile = resolve(&ResourceIdentity::of_record(&pods[2]).unwrap());
    let config = EngineConfig::default();
    let info = quick_info(&pod_profile, &pods[2], now, config.render.quick_info_columns);
    assert_eq!(info.len(), 4);
    assert_eq!(info[2], ("Status".to_string(), "Terminating".to_string()));

    let row = render_row(&pod_profile, &pods[1], now);
    let badge = row[2].status.as_ref().unwrap();
    assert_eq!(badge.category, StatusCategory::Pending);
    assert_eq!(badge.glyph, "⟳");
}

#[test]
fn test_catalog_round_trip_from_discovery_json() {
    let discovered: Vec<ApiResourceInfo> = serde_json::from_value(json!([
        {"group": "apps", "version": "v1", "kind": "Deployment", "name": "deployments",
         "namespaced": true, "verbs": ["get", "list", "watch"]},
        {"group": "", "version": "v1", "kind": "Binding", "name": "bindings",
         "namespaced": true, "verbs": ["create"]},
        {"group": "example.io", "version": "v1", "kind": "Widget", "name": "widgets",
         "namespaced": true, "verbs": ["list"], "shortNames": ["wd"]}
    ]))
    .unwrap();

    let entries = catalog(discovered);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].category, "CRDs (example.io)");
    assert_eq!(entries[1].category, "Workloads");

    let widget = resolve(&entries[0].identity());
    assert_eq!(widget.columns.len(), 3);
}
