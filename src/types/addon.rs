// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

/// Cluster-wide registration of an add-on
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "addon.open-cluster-management.io",
    version = "v1alpha1",
    kind = "ClusterManagementAddOn"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterManagementAddOnSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_meta: Option<AddOnMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_configuration: Option<ConfigCoordinates>,
}

/// Per-cluster instance of an add-on, living in the managed cluster's namespace
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "addon.open-cluster-management.io",
    version = "v1alpha1",
    kind = "ManagedClusterAddOn"
)]
#[kube(namespaced)]
#[kube(status = "ManagedClusterAddOnStatus")]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterAddOnSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_namespace: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddOnMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigCoordinates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crd_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cr_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterAddOnStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_meta: Option<AddOnMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_objects: Option<Vec<ObjectReference>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub name: String,
}

impl ManagedClusterAddOn {
    /// Status conditions, or `None` when the add-on has not reported any
    pub fn conditions(&self) -> Option<&[Condition]> {
        self.status
            .as_ref()
            .and_then(|s| s.conditions.as_deref())
    }
}

/// Check whether a resource carries every one of the given annotation keys
pub fn has_annotations<K: ResourceExt>(resource: &K, keys: &[&str]) -> bool {
    let annotations = resource.annotations();
    keys.iter().all(|key| annotations.contains_key(*key))
}

/// Look up a single annotation value on a resource
pub fn annotation<'a, K: ResourceExt>(resource: &'a K, key: &str) -> Option<&'a str> {
    resource.annotations().get(key).map(String::as_str)
}
