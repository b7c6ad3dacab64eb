// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "batch.my.domain", version = "v1", kind = "Draven")]
#[kube(namespaced)]
#[kube(status = "DravenStatus")]
#[serde(rename_all = "camelCase")]
pub struct DravenSpec {
    /// Name of the pod this resource is looking for
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DravenStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub happy: Option<String>,
}

impl Draven {
    /// Check if this resource points at the given pod name
    pub fn targets(&self, pod_name: &str) -> bool {
        self.spec.name == pod_name
    }

    /// Current value of the happy marker, if any
    pub fn happy(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.happy.as_deref())
    }
}
