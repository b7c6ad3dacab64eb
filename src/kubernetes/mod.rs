// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD discovery and RBAC manifests.

pub mod crd;
pub mod rbac;

pub use crd::wait_for_draven_crd;
pub use rbac::cluster_role;
