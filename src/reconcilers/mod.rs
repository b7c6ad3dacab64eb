// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes reconcilers that react to watch events.

pub mod backoff;
pub mod draven;
pub mod mapper;

pub use draven::DravenReconciler;
pub use mapper::{related_dravens, EventMapper};
