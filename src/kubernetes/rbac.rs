// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Permissions the controller needs, rendered as a ClusterRole.

use crate::constants::api::{GROUP, PLURAL};
use crate::constants::CONTROLLER_NAME;
use k8s_openapi::api::rbac::v1::{ClusterRole, PolicyRule};
use kube::api::ObjectMeta;

fn rule(api_group: &str, resource: &str, verbs: &[&str]) -> PolicyRule {
    PolicyRule {
        api_groups: Some(vec![api_group.to_string()]),
        resources: Some(vec![resource.to_string()]),
        verbs: verbs.iter().map(|v| v.to_string()).collect(),
        ..Default::default()
    }
}

/// ClusterRole granting access to Dravens, their status and finalizers, and pods
pub fn cluster_role() -> ClusterRole {
    ClusterRole {
        metadata: ObjectMeta {
            name: Some(format!("{}-role", CONTROLLER_NAME)),
            ..Default::default()
        },
        rules: Some(vec![
            rule(
                GROUP,
                PLURAL,
                &["get", "list", "watch", "create", "update", "patch", "delete"],
            ),
            rule(GROUP, &format!("{}/status", PLURAL), &["get", "update", "patch"]),
            rule(GROUP, &format!("{}/finalizers", PLURAL), &["update"]),
            rule("", "pods", &["get", "list", "watch"]),
        ]),
        ..Default::default()
    }
}
