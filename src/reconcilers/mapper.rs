// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod event mapper - turns pod changes into reconcile requests for the
//! Dravens that reference the pod by name.

use crate::types::Draven;
use futures::{future, stream, Stream, StreamExt};
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::ListParams,
    runtime::{reflector::ObjectRef, watcher, WatchStreamExt},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use tracing::{debug, error, info, instrument, warn};

#[derive(Clone)]
pub struct EventMapper {
    client: Client,
}

impl EventMapper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all Dravens and return a reconcile request for each one targeting `pod`.
    /// A failed list yields no requests.
    #[instrument(skip(self, pod), fields(pod = %pod.name_any()))]
    pub async fn map_pod(&self, pod: &Pod) -> Vec<ObjectRef<Draven>> {
        let dravens: Api<Draven> = Api::all(self.client.clone());

        match dravens.list(&ListParams::default()).await {
            Ok(list) => related_dravens(&pod.name_any(), &list.items),
            Err(e) => {
                error!("Unable to list Draven custom resources: {}", e);
                Vec::new()
            }
        }
    }
}

/// References to every Draven whose `spec.name` equals `pod_name`, in list order
pub fn related_dravens(pod_name: &str, dravens: &[Draven]) -> Vec<ObjectRef<Draven>> {
    dravens
        .iter()
        .filter(|d| d.targets(pod_name))
        .map(|d| {
            info!(
                "Pod {} linked to Draven {}/{} issued an event",
                pod_name,
                d.namespace().unwrap_or_default(),
                d.name_any()
            );
            ObjectRef::from_obj(d)
        })
        .collect()
}

/// Watch all pods and map every touched pod to the Dravens that reference it
pub fn pod_triggers(
    pods: Api<Pod>,
    mapper: EventMapper,
) -> impl Stream<Item = ObjectRef<Draven>> + Send + 'static {
    watcher(pods, WatcherConfig::default())
        .default_backoff()
        .touched_objects()
        .filter_map(|event| {
            future::ready(match event {
                Ok(pod) => Some(pod),
                Err(e) => {
                    warn!("Pod watch error: {}", e);
                    None
                }
            })
        })
        .then(move |pod| {
            let mapper = mapper.clone();
            async move {
                let requests = mapper.map_pod(&pod).await;
                debug!(
                    "Pod {} mapped to {} Draven(s)",
                    pod.name_any(),
                    requests.len()
                );
                requests
            }
        })
        .flat_map(stream::iter)
}
