// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Seams to the external collaborators: the data provider that supplies
//! record snapshots and the navigation sink that receives selections.
//!
//! Neither is implemented here. The provider owns network access, retries,
//! and plural-name resolution; the core only consumes complete snapshots.

pub mod navigation;
pub mod requests;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::config::LayoutConfig;
use crate::topology::{GraphBuilder, TopologyGraph};

pub use navigation::{NavigationSink, NavigationTarget};
pub use requests::{related_pods_request, GetRequest, ListRequest};

/// Failures reported by a data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Resource not found: {kind} {name}")]
    NotFound { kind: String, name: String },
    #[error("Access denied: {0}")]
    Forbidden(String),
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of record snapshots.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// List records matching `request`, in unspecified order.
    async fn list(&self, request: &ListRequest) -> Result<Vec<Value>, ProviderError>;

    /// Fetch a single record by name.
    async fn get(&self, request: &GetRequest) -> Result<Value, ProviderError>;
}

/// Fetch the Ingress, Service, and Pod collections and build one topology.
///
/// The three lists are fetched concurrently and all of them complete before
/// any graph work starts. A provider failure aborts the whole computation.
///
/// # Errors
/// Propagates the first `ProviderError` returned by `provider`.
pub async fn fetch_topology<P>(
    provider: &P,
    namespace: Option<&str>,
    layout: LayoutConfig,
) -> Result<TopologyGraph, ProviderError>
where
    P: ResourceProvider + ?Sized,
{
    let ingress_request = ListRequest::ingresses(namespace);
    let service_request = ListRequest::services(namespace);
    let pod_request = ListRequest::pods(namespace);

    let (ingresses, services, pods) = tokio::try_join!(
        provider.list(&ingress_request),
        provider.list(&service_request),
        provider.list(&pod_request),
    )?;

    tracing::debug!(
        ingresses = ingresses.len(),
        services = services.len(),
        pods = pods.len(),
        "Fetched topology snapshot"
    );

    Ok(GraphBuilder::new(layout).build(&ingresses, &services, &pods))
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
