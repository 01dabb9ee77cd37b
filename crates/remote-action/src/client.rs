//! # Remote Action Client
//!
//! This module defines [`RemoteActionClient`], which turns an action name and
//! a parameter bag into one HTTP request against a [`ResourceEndpoint`].

use crate::endpoint::{ActionDescriptor, ParamDefault, ResourceEndpoint};
use crate::error::ClientError;
use crate::message::{ActionParams, ResolvedRequest, TransportResponse};
use crate::transport::{HttpTransport, Transport};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A table-driven client for one [`ResourceEndpoint`].
///
/// ## RemoteActionClient
///
/// The client holds the endpoint table and a [`Transport`] behind `Arc`s, so it
/// is cheap to clone and can be shared across tasks. It keeps no other state:
/// every [`invoke`](Self::invoke) is independent, issues exactly one request,
/// and never retries.
///
/// # Resolution
///
/// For each placeholder in the action's path template the value is taken from,
/// in order:
/// 1. the caller's `params` entry with the placeholder's name,
/// 2. the descriptor's default (a literal, or `@field` read from `params`),
///
/// and otherwise the call fails with [`ClientError::MissingParameter`] before
/// anything is sent. Params not consumed by a placeholder become the JSON body
/// for `POST`/`PUT`/`PATCH` and the query string for `GET`/`DELETE`.
///
/// ```rust
/// use remote_action::{ActionDescriptor, ActionParams, HttpMethod, RemoteActionClient, ResourceEndpoint};
/// use remote_action::mock::MockTransport;
/// use std::sync::Arc;
///
/// let endpoint = ResourceEndpoint::builder("http://localhost:9000/api/open-amt")
///     .action(ActionDescriptor::new("info", HttpMethod::Get, "/:id/:action").default_param("action", "info"))
///     .build()
///     .unwrap();
/// let client = RemoteActionClient::new(Arc::new(endpoint), MockTransport::new());
///
/// let request = client.resolve("info", &ActionParams::new().with("id", "42")).unwrap();
/// assert_eq!(request.url.as_str(), "http://localhost:9000/api/open-amt/42/info");
/// ```
pub struct RemoteActionClient<T: Transport = HttpTransport> {
    endpoint: Arc<ResourceEndpoint>,
    transport: Arc<T>,
}

impl<T: Transport> Clone for RemoteActionClient<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: Arc::clone(&self.endpoint),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl RemoteActionClient<HttpTransport> {
    /// Client over a fresh `reqwest` transport.
    pub fn http(endpoint: Arc<ResourceEndpoint>) -> Result<Self, ClientError> {
        Ok(Self::new(endpoint, HttpTransport::new()?))
    }
}

impl<T: Transport> RemoteActionClient<T> {
    pub fn new(endpoint: Arc<ResourceEndpoint>, transport: T) -> Self {
        Self::with_shared_transport(endpoint, Arc::new(transport))
    }

    pub fn with_shared_transport(endpoint: Arc<ResourceEndpoint>, transport: Arc<T>) -> Self {
        Self { endpoint, transport }
    }

    pub fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// Resolves `action` into a request without sending it.
    pub fn resolve(&self, action: &str, params: &ActionParams) -> Result<ResolvedRequest, ClientError> {
        let descriptor = self
            .endpoint
            .action(action)
            .ok_or_else(|| ClientError::UnknownAction(action.to_string()))?;

        let mut consumed = BTreeSet::new();
        let segments = descriptor
            .path()
            .resolve(|name| resolve_placeholder(descriptor, params, name, &mut consumed))?;

        let mut url = self.endpoint.base_url().clone();
        // Base URLs are checked to be hierarchical when the endpoint is built.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(&segments);
        }

        let leftovers = params.iter().filter(|(key, value)| !consumed.contains(*key) && !value.is_null());
        let (query, body) = if descriptor.method().has_body() {
            let map: Map<String, Value> = leftovers.map(|(k, v)| (k.to_string(), v.clone())).collect();
            (Vec::new(), (!map.is_empty()).then_some(Value::Object(map)))
        } else {
            (query_pairs(leftovers), None)
        };

        Ok(ResolvedRequest {
            action: descriptor.name().to_string(),
            method: descriptor.method(),
            url,
            query,
            body,
        })
    }

    /// Resolves and dispatches `action`, returning the decoded JSON body.
    ///
    /// An empty 2xx body decodes to `Value::Null`.
    #[instrument(skip(self, params), fields(params = params.len()))]
    pub async fn invoke(&self, action: &str, params: ActionParams) -> Result<Value, ClientError> {
        let request = self.resolve(action, &params)?;
        debug!(method = %request.method, url = %request.url, "Dispatching request");

        let response = self.transport.send(request).await?;
        debug!(status = response.status, "Response received");
        decode(response)
    }

    /// Like [`invoke`](Self::invoke), deserializing the body into `R`.
    pub async fn invoke_as<R: DeserializeOwned>(&self, action: &str, params: ActionParams) -> Result<R, ClientError> {
        let value = self.invoke(action, params).await?;
        serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

fn resolve_placeholder(
    descriptor: &ActionDescriptor,
    params: &ActionParams,
    name: &str,
    consumed: &mut BTreeSet<String>,
) -> Result<String, ClientError> {
    if let Some(value) = params.get(name) {
        consumed.insert(name.to_string());
        return segment_text(name, value);
    }

    let missing = || ClientError::MissingParameter {
        action: descriptor.name().to_string(),
        name: name.to_string(),
    };
    match descriptor.default_for(name) {
        Some(ParamDefault::Literal(value)) => Ok(value.clone()),
        Some(ParamDefault::FromField(field)) => match params.get(field) {
            Some(value) => segment_text(name, value),
            None => Err(missing()),
        },
        None => Err(missing()),
    }
}

/// Renders a param as path text. Dot segments are refused because the URL
/// path builder drops them, which would silently change the route.
fn segment_text(name: &str, value: &Value) -> Result<String, ClientError> {
    match scalar_text(value) {
        Some(text) if text != "." && text != ".." => Ok(text),
        _ => Err(ClientError::InvalidParameter { name: name.to_string() }),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn query_pairs<'a>(params: impl Iterator<Item = (&'a str, &'a Value)>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items.iter().filter(|item| !item.is_null()) {
                    let text = scalar_text(item).unwrap_or_else(|| item.to_string());
                    pairs.push((key.to_string(), text));
                }
            }
            other => {
                let text = scalar_text(other).unwrap_or_else(|| other.to_string());
                pairs.push((key.to_string(), text));
            }
        }
    }
    pairs
}

fn decode(response: TransportResponse) -> Result<Value, ClientError> {
    if !response.is_success() {
        return Err(ClientError::RemoteError {
            status: response.status,
            body: response.body,
        });
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
