// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Grouping of discovered API resources into navigation categories.

use serde::{Deserialize, Serialize};

use super::identity::ResourceIdentity;

/// One discovered, listable API resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceInfo {
    pub group: String,
    pub version: String,
    pub kind: String,
    /// Plural resource name used in request paths.
    pub name: String,
    pub namespaced: bool,
    #[serde(default)]
    pub verbs: Vec<String>,
    #[serde(default)]
    pub short_names: Vec<String>,
    #[serde(default)]
    pub category: String,
}

impl ApiResourceInfo {
    pub fn identity(&self) -> ResourceIdentity {
        ResourceIdentity::new(&self.group, &self.version, &self.kind)
    }

    pub fn is_listable(&self) -> bool {
        self.verbs.iter().any(|v| v == "list")
    }
}

/// Navigation category for a kind.
pub fn categorize(group: &str, kind: &str) -> String {
    let category = match kind {
        "Pod" | "Deployment" | "ReplicaSet" | "StatefulSet" | "DaemonSet" | "Job" | "CronJob" => {
            "Workloads"
        }
        "Service" | "Endpoints" | "Ingress" | "NetworkPolicy" | "IngressClass" => "Network",
        "PersistentVolume" | "PersistentVolumeClaim" | "StorageClass" | "VolumeAttachment" => {
            "Storage"
        }
        "ConfigMap" | "Secret" | "ResourceQuota" | "LimitRange" | "HorizontalPodAutoscaler" => {
            "Config"
        }
        "ServiceAccount" | "Role" | "RoleBinding" | "ClusterRole" | "ClusterRoleBinding" => "RBAC",
        "Namespace" | "Node" | "Event" => "Cluster",
        _ if !group.is_empty() => return format!("CRDs ({})", group),
        _ => "Other",
    };
    category.to_string()
}

/// Keep listable resources, assign categories, and sort by (category, kind).
pub fn catalog(resources: impl IntoIterator<Item = ApiResourceInfo>) -> Vec<ApiResourceInfo> {
    let mut infos: Vec<ApiResourceInfo> = resources
        .into_iter()
        .filter(ApiResourceInfo::is_listable)
        .map(|mut info| {
            info.category = categorize(&info.group, &info.kind);
            info
        })
        .collect();
    infos.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.kind.cmp(&b.kind)));
    infos
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
