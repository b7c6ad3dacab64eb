// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prints the Draven CRD and the controller's ClusterRole as YAML.

use draven::kubernetes::cluster_role;
use draven::types::Draven;
use kube::CustomResourceExt;

fn main() -> anyhow::Result<()> {
    let crd = serde_yaml::to_string(&Draven::crd())?;
    let role = serde_yaml::to_string(&cluster_role())?;
    print!("{}---\n{}", crd, role);
    Ok(())
}
