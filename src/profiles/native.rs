// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hand-authored profiles for well-known kinds.
//!
//! Built once on first access and read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{ActionDefinition, ActionType, ColumnDefinition, ColumnType, ResourceProfile};
use crate::resource::ResourceIdentity;

fn name() -> ColumnDefinition {
    ColumnDefinition::new("Name", "metadata.name", ColumnType::Link).with_width(240)
}

fn namespace() -> ColumnDefinition {
    ColumnDefinition::new("Namespace", "metadata.namespace", ColumnType::Text).with_width(140)
}

fn age() -> ColumnDefinition {
    ColumnDefinition::new("Age", "metadata.creationTimestamp", ColumnType::Age).with_width(70)
}

fn col(header: &str, path: &str, column_type: ColumnType) -> ColumnDefinition {
    ColumnDefinition::new(header, path, column_type)
}

fn standard_actions() -> Vec<ActionDefinition> {
    vec![
        ActionDefinition::new("View", ActionType::View).with_icon("eye"),
        ActionDefinition::new("Edit", ActionType::Edit).with_icon("pencil"),
        ActionDefinition::new("Delete", ActionType::Delete).with_icon("trash"),
    ]
}

fn profile(
    identity: ResourceIdentity,
    columns: Vec<ColumnDefinition>,
    actions: Option<Vec<ActionDefinition>>,
) -> ResourceProfile {
    ResourceProfile {
        identity,
        columns,
        actions,
    }
}

fn pod() -> ResourceProfile {
    let mut actions = standard_actions();
    actions.push(ActionDefinition::new("Shell", ActionType::Terminal).with_icon("terminal"));
    profile(
        ResourceIdentity::pod(),
        vec![
            name(),
            namespace(),
            col("Status", "status.phase", ColumnType::EnhancedStatus).with_width(120),
            col("Ready", "status.containerStatuses", ColumnType::ContainerStatuses),
            col("Restarts", "status.containerStatuses[*].restartCount", ColumnType::List),
            col("Node", "spec.nodeName", ColumnType::Text),
            col("IP", "status.podIP", ColumnType::Text),
            age(),
        ],
        Some(actions),
    )
}

fn replicated(kind: &str, ready_path: &str, desired_path: &str) -> ResourceProfile {
    profile(
        ResourceIdentity::new("apps", "v1", kind),
        vec![
            name(),
            namespace(),
            col("Ready", ready_path, ColumnType::Number),
            col("Desired", desired_path, ColumnType::Number),
            age(),
        ],
        Some(standard_actions()),
    )
}

fn deployment() -> ResourceProfile {
    profile(
        ResourceIdentity::new("apps", "v1", "Deployment"),
        vec![
            name(),
            namespace(),
            col(
                "Available",
                "status.conditions[?(@.type=='Available')].status",
                ColumnType::Status,
            ),
            col("Ready", "status.readyReplicas", ColumnType::Number),
            col("Up-to-date", "status.updatedReplicas", ColumnType::Number),
            col("Desired", "spec.replicas", ColumnType::Number),
            age(),
        ],
        Some(standard_actions()),
    )
}

fn job() -> ResourceProfile {
    profile(
        ResourceIdentity::new("batch", "v1", "Job"),
        vec![
            name(),
            namespace(),
            col(
                "Complete",
                "status.conditions[?(@.type=='Complete')].status",
                ColumnType::Status,
            ),
            col("Succeeded", "status.succeeded", ColumnType::Number),
            col("Active", "status.active", ColumnType::Number),
            age(),
        ],
        Some(standard_actions()),
    )
}

fn cron_job() -> ResourceProfile {
    profile(
        ResourceIdentity::new("batch", "v1", "CronJob"),
        vec![
            name(),
            namespace(),
            col("Schedule", "spec.schedule", ColumnType::Text),
            col("Suspend", "spec.suspend", ColumnType::Boolean),
            col("Last Schedule", "status.lastScheduleTime", ColumnType::Age),
            age(),
        ],
        Some(standard_actions()),
    )
}

fn service() -> ResourceProfile {
    profile(
        ResourceIdentity::service(),
        vec![
            name(),
            namespace(),
            col("Type", "spec.type", ColumnType::Text),
            col("Cluster IP", "spec.clusterIP", ColumnType::Text),
            col("Ports", "spec.ports[*].port", ColumnType::List),
            col("Selector", "spec.selector", ColumnType::Text),
            age(),
        ],
        Some(standard_actions()),
    )
}

fn ingress() -> ResourceProfile {
    let mut actions = standard_actions();
    actions.push(
        ActionDefinition::new("Open", ActionType::OpenUrl)
            .with_icon("external-link")
            .with_url_path("spec.rules[0].host"),
    );
    profile(
        ResourceIdentity::ingress(),
        vec![
            name(),
            namespace(),
            col("Class", "spec.ingressClassName", ColumnType::Text),
            col("Hosts", "spec.rules[*].host", ColumnType::List),
            col("Address", "status.loadBalancer.ingress[*].ip", ColumnType::List),
            age(),
        ],
        Some(actions),
    )
}

fn config_map() -> ResourceProfile {
    profile(
        ResourceIdentity::core("v1", "ConfigMap"),
        vec![name(), namespace(), col("Data", "data", ColumnType::Text), age()],
        Some(standard_actions()),
    )
}

fn secret() -> ResourceProfile {
    profile(
        ResourceIdentity::core("v1", "Secret"),
        vec![
            name(),
            namespace(),
            col("Type", "type", ColumnType::Text),
            col("Data", "data", ColumnType::Text),
            age(),
        ],
        Some(standard_actions()),
    )
}

fn persistent_volume_claim() -> ResourceProfile {
    profile(
        ResourceIdentity::core("v1", "PersistentVolumeClaim"),
        vec![
            name(),
            namespace(),
            col("Status", "status.phase", ColumnType::Status),
            col("Volume", "spec.volumeName", ColumnType::Text),
            col("Capacity", "status.capacity.storage", ColumnType::Text),
            col("Storage Class", "spec.storageClassName", ColumnType::Text),
            age(),
        ],
        Some(standard_actions()),
    )
}

fn namespace_kind() -> ResourceProfile {
    profile(
        ResourceIdentity::core("v1", "Namespace"),
        vec![name(), col("Status", "status.phase", ColumnType::Status), age()],
        Some(vec![
            ActionDefinition::new("View", ActionType::View).with_icon("eye"),
            ActionDefinition::new("Delete", ActionType::Delete).with_icon("trash"),
        ]),
    )
}

fn node() -> ResourceProfile {
    profile(
        ResourceIdentity::core("v1", "Node"),
        vec![
            name(),
            col(
                "Ready",
                "status.conditions[?(@.type=='Ready')].status",
                ColumnType::Status,
            ),
            col("Version", "status.nodeInfo.kubeletVersion", ColumnType::Text),
            col(
                "Internal IP",
                "status.addresses[?(@.type=='InternalIP')].address",
                ColumnType::Text,
            ),
            col("Unschedulable", "spec.unschedulable", ColumnType::Boolean),
            age(),
        ],
        Some(vec![
            ActionDefinition::new("View", ActionType::View).with_icon("eye"),
            ActionDefinition::new("Edit", ActionType::Edit).with_icon("pencil"),
        ]),
    )
}

fn event() -> ResourceProfile {
    profile(
        ResourceIdentity::core("v1", "Event"),
        vec![
            name(),
            namespace(),
            col("Type", "type", ColumnType::Text),
            col("Reason", "reason", ColumnType::Text),
            col("Object", "involvedObject.name", ColumnType::Text),
            col("Message", "message", ColumnType::Text).with_width(400),
            col("Count", "count", ColumnType::Number),
            col("Last Seen", "lastTimestamp", ColumnType::Age),
            age(),
        ],
        Some(vec![ActionDefinition::new("View", ActionType::View).with_icon("eye")]),
    )
}

fn build_table() -> HashMap<String, ResourceProfile> {
    [
        pod(),
        deployment(),
        replicated("ReplicaSet", "status.readyReplicas", "spec.replicas"),
        replicated("StatefulSet", "status.readyReplicas", "spec.replicas"),
        replicated("DaemonSet", "status.numberReady", "status.desiredNumberScheduled"),
        job(),
        cron_job(),
        service(),
        ingress(),
        config_map(),
        secret(),
        persistent_volume_claim(),
        namespace_kind(),
        node(),
        event(),
    ]
    .into_iter()
    .map(|p| (p.identity.lookup_key(), p))
    .collect()
}

/// Process-wide native profile table keyed by normalized lookup key.
pub fn native_table() -> &'static HashMap<String, ResourceProfile> {
    static TABLE: OnceLock<HashMap<String, ResourceProfile>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}
