// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request observed by the mock, with its body collected.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// A mock HTTP service that returns predefined responses based on request paths
/// and records every request it serves.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Add a response for GET requests matching the path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for PATCH requests matching the path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    /// Build a kube Client from this mock service. The mock stays usable for
    /// inspecting recorded requests.
    pub fn client(&self) -> Client {
        Client::new(self.clone(), "default")
    }

    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// All requests served so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests served so far with the given method
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();

        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Longest registered prefix wins
        responses
            .iter()
            .filter(|((m, p), _)| m == method && path.starts_with(p.as_str()))
            .max_by_key(|((_, p), _)| p.len())
            .map(|(_, resp)| resp.clone())
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.find_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let body = req.into_body().collect().await?.to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                body,
            });

            let (status, body) = response.unwrap_or_else(|| {
                // Default 404 for unmatched requests
                (404, not_found_json("resource", "unknown"))
            });
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a Pod list JSON response with one pod per name
pub fn pod_list_json(pods: &[(&str, &str)]) -> String {
    let items: Vec<_> = pods
        .iter()
        .map(|(namespace, name)| {
            serde_json::json!({
                "apiVersion": "v1",
                "kind": "Pod",
                "metadata": {
                    "name": name,
                    "namespace": namespace,
                    "uid": format!("uid-{}", name)
                }
            })
        })
        .collect();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": {"resourceVersion": "1"},
        "items": items
    })
    .to_string()
}

/// Create a Draven JSON object
pub fn draven_value(
    namespace: &str,
    name: &str,
    target: &str,
    happy: Option<&str>,
) -> serde_json::Value {
    let mut value = serde_json::json!({
        "apiVersion": "batch.my.domain/v1",
        "kind": "Draven",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": format!("uid-{}", name),
            "resourceVersion": "1"
        },
        "spec": {"name": target}
    });
    if let Some(happy) = happy {
        value["status"] = serde_json::json!({ "happy": happy });
    }
    value
}

/// Create a Draven JSON response
pub fn draven_json(namespace: &str, name: &str, target: &str, happy: Option<&str>) -> String {
    draven_value(namespace, name, target, happy).to_string()
}

/// Create a Draven list JSON response
pub fn draven_list_json(items: &[serde_json::Value]) -> String {
    serde_json::json!({
        "apiVersion": "batch.my.domain/v1",
        "kind": "DravenList",
        "metadata": {"resourceVersion": "1"},
        "items": items
    })
    .to_string()
}

/// Create an error status response with the given code and reason
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(
        404,
        "NotFound",
        &format!("{} \"{}\" not found", resource, name),
    )
}
