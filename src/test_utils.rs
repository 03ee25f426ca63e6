// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Responses = HashMap<(String, String), VecDeque<(u16, String)>>;

/// A mock HTTP service that returns predefined responses based on request paths.
/// Watch requests (`?watch=true`) are recorded separately and answered with 404.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<Responses>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response for GET requests matching the exact path. Queued
    /// responses are served in order and the last one repeats.
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.enqueue("GET", path, status, body)
    }

    fn enqueue(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
        self
    }

    /// Paths of all requests received so far
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests_with("GET")
    }

    /// Paths of all watch requests received so far
    pub fn watched_paths(&self) -> Vec<String> {
        self.requests_with("WATCH")
    }

    fn requests_with(&self, method: &str) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(&(method.to_string(), path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
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
        let is_watch = req
            .uri()
            .query()
            .is_some_and(|q| q.split('&').any(|p| p == "watch=true"));
        let method = if is_watch {
            "WATCH".to_string()
        } else {
            req.method().to_string()
        };
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.find_response(&method, &path);

        Box::pin(async move {
            let (status, body) =
                response.unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// API path listing all ClusterManagementAddOns
pub const CLUSTER_MANAGEMENT_ADDONS_PATH: &str =
    "/apis/addon.open-cluster-management.io/v1alpha1/clustermanagementaddons";

/// API path listing the ManagedClusterAddOns of one managed cluster
pub fn managed_cluster_addons_path(cluster: &str) -> String {
    format!(
        "/apis/addon.open-cluster-management.io/v1alpha1/namespaces/{}/managedclusteraddons",
        cluster
    )
}

/// Create a list response wrapping the given items
pub fn list_json(kind: &str, items: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "apiVersion": "addon.open-cluster-management.io/v1alpha1",
        "kind": format!("{}List", kind),
        "metadata": {"resourceVersion": "1"},
        "items": items
    })
    .to_string()
}

/// Create a ClusterManagementAddOn JSON object
pub fn cluster_management_addon_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "addon.open-cluster-management.io/v1alpha1",
        "kind": "ClusterManagementAddOn",
        "metadata": {"name": name},
        "spec": {}
    })
}

/// Create a ManagedClusterAddOn JSON object with the given conditions
pub fn managed_cluster_addon_json(
    name: &str,
    cluster: &str,
    conditions: serde_json::Value,
) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "addon.open-cluster-management.io/v1alpha1",
        "kind": "ManagedClusterAddOn",
        "metadata": {"name": name, "namespace": cluster},
        "spec": {},
        "status": {"conditions": conditions}
    })
}

/// Create a Status failure response
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
