// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Draven reconciler - marks a Draven happy once a pod with the name in its
//! spec exists anywhere in the cluster.

use crate::config::Config;
use crate::error::{DravenError, Result};
use crate::reconcilers::backoff::ErrorBackoff;
use crate::reconcilers::mapper::{pod_triggers, EventMapper};
use crate::types::{Draven, DravenSpec, DravenStatus};
use futures::StreamExt;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{ListParams, Patch, PatchParams},
    runtime::{controller::Action, watcher, Controller},
    Api, Client, ResourceExt,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub struct DravenReconciler {
    client: Client,
    config: Config,
    backoff: ErrorBackoff,
}

impl DravenReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            config,
            backoff: ErrorBackoff::new(),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let dravens: Api<Draven> = Api::all(self.client.clone());
        let pods: Api<Pod> = Api::all(self.client.clone());
        let triggers = pod_triggers(pods, EventMapper::new(self.client.clone()));
        let context = Arc::new(self);

        Controller::new(dravens, watcher::Config::default())
            .reconcile_on(triggers)
            .shutdown_on_signal()
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled Draven: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }

    /// Reconcile the Draven `namespace/name` and return the status that was written.
    #[instrument(skip(self), fields(draven = %format!("{}/{}", namespace, name)))]
    pub async fn reconcile_key(&self, namespace: &str, name: &str) -> Result<DravenStatus> {
        info!("Reconciling Draven custom resource");

        let dravens: Api<Draven> = Api::namespaced(self.client.clone(), namespace);
        let mut fetch_error = None;
        let draven = match dravens.get(name).await {
            Ok(d) => d,
            Err(e) if self.config.abort_on_fetch_error => {
                error!("Unable to fetch Draven: {}", e);
                return Err(DravenError::FetchError {
                    key: object_key(namespace, name),
                    source: e,
                });
            }
            Err(e) => {
                error!("Unable to fetch Draven, continuing with an empty resource: {}", e);
                fetch_error = Some(e);
                let mut draven = Draven::new(name, DravenSpec::default());
                draven.metadata.namespace = Some(namespace.to_string());
                draven
            }
        };

        let pod_found = match self.list_pods().await {
            Ok(pods) => target_pod_exists(&draven.spec.name, &pods),
            Err(e) => {
                error!("Unable to list pods: {}", e);
                false
            }
        };

        let status = next_status(draven.status.as_ref(), pod_found, &self.config.happy_marker);
        let patch = serde_json::json!({ "status": status });

        if let Err(e) = dravens
            .patch_status(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await
        {
            error!("Unable to update Draven happy status (pod found: {}): {}", pod_found, e);
            return Err(DravenError::StatusUpdateError {
                key: object_key(namespace, name),
                source: e,
            });
        }

        info!("Draven happy status updated (pod found: {})", pod_found);

        // The scan ran against an empty resource, hand the fetch error to the error policy
        if let Some(e) = fetch_error {
            return Err(DravenError::FetchError {
                key: object_key(namespace, name),
                source: e,
            });
        }

        info!("Draven custom resource reconciled");
        Ok(status)
    }

    async fn list_pods(&self) -> Result<Vec<Pod>> {
        let pods: Api<Pod> = Api::all(self.client.clone());
        let pod_list = pods.list(&ListParams::default()).await?;
        Ok(pod_list.items)
    }
}

/// Check every pod for one named `target`, logging each match
fn target_pod_exists(target: &str, pods: &[Pod]) -> bool {
    let mut found = false;
    for pod in pods.iter().filter(|p| p.metadata.name.as_deref() == Some(target)) {
        info!(
            "Pod linked to Draven found: {}/{}",
            pod.namespace().unwrap_or_default(),
            target
        );
        found = true;
    }
    found
}

/// Status to write: the marker when the pod was found, the previous status otherwise
fn next_status(previous: Option<&DravenStatus>, pod_found: bool, marker: &str) -> DravenStatus {
    let mut status = previous.cloned().unwrap_or_default();
    if pod_found {
        status.happy = Some(marker.to_string());
    }
    status
}

fn object_key(namespace: &str, name: &str) -> String {
    format!("{}/{}", namespace, name)
}

async fn reconcile(draven: Arc<Draven>, ctx: Arc<DravenReconciler>) -> Result<Action> {
    let name = draven
        .metadata
        .name
        .clone()
        .ok_or_else(|| DravenError::MissingName(format!("{:?}", draven.metadata)))?;
    let namespace = draven.namespace().unwrap_or_default();

    ctx.reconcile_key(&namespace, &name).await?;
    ctx.backoff.reset(&object_key(&namespace, &name));

    // Pod and Draven watches re-trigger us, nothing to poll for
    Ok(Action::await_change())
}

fn error_policy(draven: Arc<Draven>, error: &DravenError, ctx: Arc<DravenReconciler>) -> Action {
    let key = object_key(&draven.namespace().unwrap_or_default(), &draven.name_any());
    if error.is_not_found() {
        debug!("Draven {} is gone, dropping its retry state", key);
        ctx.backoff.reset(&key);
        return Action::await_change();
    }
    let delay = ctx.backoff.record_failure(&key);
    error!("Reconciliation error for {}: {}, retrying in {:?}", key, error, delay);
    Action::requeue(delay)
}
