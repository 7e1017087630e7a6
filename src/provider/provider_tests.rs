// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for the provider and navigation seams.

use super::*;
use crate::resource::ResourceIdentity;
use serde_json::json;
use std::sync::Mutex;

struct FakeProvider {
    ingresses: Vec<Value>,
    services: Vec<Value>,
    pods: Vec<Value>,
    requests: Mutex<Vec<ListRequest>>,
    fail_on: Option<&'static str>,
}

impl FakeProvider {
    fn new(ingresses: Vec<Value>, services: Vec<Value>, pods: Vec<Value>) -> Self {
        Self {
            ingresses,
            services,
            pods,
            requests: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }
}

#[async_trait]
impl ResourceProvider for FakeProvider {
    async fn list(&self, request: &ListRequest) -> Result<Vec<Value>, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail_on == Some(request.plural.as_str()) {
            return Err(ProviderError::Unavailable("connection refused".to_string()));
        }
        Ok(match request.plural.as_str() {
            "ingresses" => self.ingresses.clone(),
            "services" => self.services.clone(),
            "pods" => self.pods.clone(),
            _ => vec![],
        })
    }

    async fn get(&self, request: &GetRequest) -> Result<Value, ProviderError> {
        Err(ProviderError::NotFound {
            kind: request.identity.kind.clone(),
            name: request.name.clone(),
        })
    }
}

fn snapshot() -> FakeProvider {
    FakeProvider::new(
        vec![],
        vec![json!({
            "metadata": {"name": "web", "namespace": "prod"},
            "spec": {"selector": {"app": "web"}}
        })],
        vec![json!({
            "metadata": {"name": "web-1", "namespace": "prod", "labels": {"app": "web"}}
        })],
    )
}

#[tokio::test]
async fn test_fetch_topology_builds_from_snapshot() {
    let provider = snapshot();
    let graph = fetch_topology(&provider, Some("prod"), LayoutConfig::default())
        .await
        .unwrap();

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);

    let requests = provider.requests.lock().unwrap();
    let mut plurals: Vec<&str> = requests.iter().map(|r| r.plural.as_str()).collect();
    plurals.sort_unstable();
    assert_eq!(plurals, vec!["ingresses", "pods", "services"]);
    assert!(requests.iter().all(|r| r.namespace.as_deref() == Some("prod")));
}

#[tokio::test]
async fn test_fetch_topology_propagates_provider_failure() {
    let mut provider = snapshot();
    provider.fail_on = Some("services");
    let err = fetch_topology(&provider, None, LayoutConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Unavailable(_)));
    assert_eq!(err.to_string(), "Provider unavailable: connection refused");
}

#[test]
fn test_get_through_trait_object() {
    let provider: Box<dyn ResourceProvider> = Box::new(snapshot());
    let request = GetRequest::new(ResourceIdentity::pod(), "pods", Some("prod"), "gone");
    let err = tokio_test::block_on(provider.get(&request)).unwrap_err();
    assert_eq!(err.to_string(), "Resource not found: Pod gone");
}

#[test]
fn test_related_pods_request_from_deployment() {
    let deployment = json!({
        "metadata": {"name": "web", "namespace": "prod"},
        "spec": {"selector": {"matchLabels": {"tier": "front", "app": "web"}}}
    });
    let owner = ResourceIdentity::new("apps", "v1", "Deployment");
    let request = related_pods_request(&owner, &deployment).unwrap();

    assert_eq!(request.identity, ResourceIdentity::pod());
    assert_eq!(request.plural, "pods");
    assert_eq!(request.namespace.as_deref(), Some("prod"));
    assert_eq!(request.label_selector.as_deref(), Some("app=web,tier=front"));
}

#[test]
fn test_related_pods_request_needs_selector_and_owner_kind() {
    let owner = ResourceIdentity::new("apps", "v1", "StatefulSet");
    let no_selector = json!({"metadata": {"name": "db", "namespace": "prod"}, "spec": {}});
    assert!(related_pods_request(&owner, &no_selector).is_none());

    let empty = json!({"metadata": {"name": "db"}, "spec": {"selector": {"matchLabels": {}}}});
    assert!(related_pods_request(&owner, &empty).is_none());

    let malformed = json!({"metadata": {"name": "db"}, "spec": {"selector": {"matchLabels": ["x"]}}});
    assert!(related_pods_request(&owner, &malformed).is_none());

    let with_selector = json!({"metadata": {"name": "x"}, "spec": {"selector": {"matchLabels": {"a": "b"}}}});
    assert!(related_pods_request(&ResourceIdentity::service(), &with_selector).is_none());
}

#[test]
fn test_list_request_namespace_normalization() {
    assert_eq!(ListRequest::pods(Some("")).namespace, None);
    assert_eq!(ListRequest::pods(None).namespace, None);
    assert_eq!(ListRequest::services(Some("prod")).namespace.as_deref(), Some("prod"));
}

#[derive(Default)]
struct RecordingSink {
    targets: Mutex<Vec<NavigationTarget>>,
}

impl NavigationSink for RecordingSink {
    fn navigate(&self, target: NavigationTarget) {
        self.targets.lock().unwrap().push(target);
    }
}

#[test]
fn test_navigation_sink_receives_target() {
    let sink = RecordingSink::default();
    let record = json!({"metadata": {"name": "node-a"}});
    let target = NavigationTarget::of_record(ResourceIdentity::core("v1", "Node"), &record).unwrap();
    sink.navigate(target);

    let targets = sink.targets.lock().unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name, "node-a");
    assert_eq!(targets[0].namespace, None);
    assert!(NavigationTarget::of_record(ResourceIdentity::pod(), &json!({})).is_none());
}
