// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: an in-memory Kubernetes API server behind a real kube Client.

use http::{Method, Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::Barrier;
use tower::Service;

/// One request seen by the mock, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
}

#[derive(Default)]
struct State {
    /// Stored objects keyed by their full object path
    objects: HashMap<String, Value>,
    /// Injected failures keyed by method and exact path
    failures: HashMap<(Method, String), u16>,
    requests: Vec<RecordedRequest>,
}

/// A mock HTTP service that behaves like the API server for GET and POST:
/// GET returns a stored object or 404, POST stores the object or answers 409
/// when the name is taken.
#[derive(Clone, Default)]
pub struct MockService {
    state: Arc<Mutex<State>>,
    get_barrier: Option<Arc<Barrier>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object at its full object path
    pub fn with_object(self, path: &str, object: Value) -> Self {
        self.state
            .lock()
            .unwrap()
            .objects
            .insert(path.to_string(), object);
        self
    }

    /// Answer every `method` request on exactly `path` with an error status
    pub fn fail_on(self, method: Method, path: &str, status: u16) -> Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert((method, path.to_string()), status);
        self
    }

    /// Hold every answered GET until `parties` of them have been answered
    pub fn hold_gets(mut self, parties: usize) -> Self {
        self.get_barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    /// Build a kube Client from this mock service; clones share state
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Collection paths of every POST, in order
    pub fn writes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::POST)
            .map(|r| r.path)
            .collect()
    }

    pub fn object(&self, path: &str) -> Option<Value> {
        self.state.lock().unwrap().objects.get(path).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.state.lock().unwrap().objects.len()
    }

    fn respond(&self, method: &Method, path: &str, body: &[u8]) -> (u16, String) {
        let mut state = self.state.lock().unwrap();

        if let Some(status) = state.failures.get(&(method.clone(), path.to_string())) {
            return (*status, status_json(*status, "injected failure"));
        }

        if *method == Method::GET {
            return match state.objects.get(path) {
                Some(object) => (200, object.to_string()),
                None => (404, status_json(404, &format!("{} not found", path))),
            };
        }

        if *method != Method::POST {
            return (405, status_json(405, "method not allowed"));
        }

        let object: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => return (400, status_json(400, &e.to_string())),
        };
        let name = object["metadata"]["name"].as_str().unwrap_or_default();
        let key = format!("{}/{}", path, name);
        if state.objects.contains_key(&key) {
            return (409, status_json(409, &format!("{} already exists", key)));
        }
        state.objects.insert(key, object.clone());
        (201, object.to_string())
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
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        self.state.lock().unwrap().requests.push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
        });

        let mock = self.clone();
        Box::pin(async move {
            let body = req.into_body().collect().await?.to_bytes();

            let (status, body) = mock.respond(&method, &path, &body);

            // Answer first, then hold: every held GET observes the same state
            if method == Method::GET {
                if let Some(barrier) = &mock.get_barrier {
                    barrier.wait().await;
                }
            }

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

fn status_json(code: u16, message: &str) -> String {
    let reason = match code {
        404 => "NotFound",
        409 => "AlreadyExists",
        403 => "Forbidden",
        400 => "BadRequest",
        405 => "MethodNotAllowed",
        _ => "InternalError",
    };
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

/// Collection path of a core/v1 resource, e.g. `secrets`
pub fn core_collection(namespace: &str, plural: &str) -> String {
    format!("/api/v1/namespaces/{}/{}", namespace, plural)
}

/// Collection path of apps/v1 deployments
pub fn deployments_collection(namespace: &str) -> String {
    format!("/apis/apps/v1/namespaces/{}/deployments", namespace)
}

pub fn wordpress_path(namespace: &str, name: &str) -> String {
    format!(
        "/apis/wordpress.example.com/v1/namespaces/{}/wordpresses/{}",
        namespace, name
    )
}

/// Create a Wordpress object as the API server would return it
pub fn wordpress_json(name: &str, namespace: &str, password: &str) -> Value {
    serde_json::json!({
        "apiVersion": "wordpress.example.com/v1",
        "kind": "Wordpress",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": format!("uid-{}", name)
        },
        "spec": {
            "sqlRootPassword": password
        }
    })
}

/// Build a typed Wordpress owner with a uid
pub fn make_owner(name: &str, namespace: &str, password: &str) -> crate::types::Wordpress {
    serde_json::from_value(wordpress_json(name, namespace, password)).unwrap()
}
