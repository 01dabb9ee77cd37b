//! # Mock Transports & Testing Guide
//!
//! Testing code that talks to a remote API should not need a server. This
//! module provides two in-memory [`Transport`]s that plug into a
//! [`RemoteActionClient`](crate::RemoteActionClient) in place of
//! [`HttpTransport`](crate::HttpTransport).
//!
//! | Feature | [`MockTransport`] | [`create_mock_transport`] |
//! |---------|-------------------|---------------------------|
//! | **Style** | Expectations set up front | Test answers each request by hand |
//! | **Determinism** | 100% deterministic | Test controls ordering |
//! | **Use Case** | Unit testing logic *around* the client | Concurrency, cancellation, slow responses |
//! | **Error Injection** | `return_status`, `return_transport_error` | Send any `Result` on the responder |
//!
//! ## Pattern 1: Expectations
//!
//! ```rust
//! use remote_action::mock::MockTransport;
//! use remote_action::{ActionDescriptor, ActionParams, ClientError, HttpMethod, RemoteActionClient, ResourceEndpoint};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let endpoint = ResourceEndpoint::builder("http://mock.local/api")
//!         .action(ActionDescriptor::new("info", HttpMethod::Get, "/:id/info"))
//!         .build()
//!         .unwrap();
//!
//!     let mock = MockTransport::new();
//!     mock.expect(HttpMethod::Get, "/api/1/info").return_json(200, json!({"Text": "ok"}));
//!     mock.expect(HttpMethod::Get, "/api/2/info").return_status(404, "not found");
//!
//!     let client = RemoteActionClient::new(Arc::new(endpoint), mock.clone());
//!     let body = client.invoke("info", ActionParams::new().with("id", 1)).await.unwrap();
//!     assert_eq!(body["Text"], "ok");
//!
//!     let err = client.invoke("info", ActionParams::new().with("id", 2)).await.unwrap_err();
//!     assert!(matches!(err, ClientError::RemoteError { status: 404, .. }));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 2: Hand-answered requests
//!
//! [`create_mock_transport`] returns a transport and the receiving end of its
//! channel. Each request arrives as a [`PendingRequest`]; the test inspects it
//! and answers through the oneshot responder, or drops the responder to
//! simulate a lost connection. See `test_concurrent_invocations_are_independent`
//! in the client module for an example.

use crate::endpoint::HttpMethod;
use crate::error::ClientError;
use crate::message::{ResolvedRequest, TransportResponse};
use crate::transport::Transport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

#[derive(Debug)]
enum Reply {
    Response(TransportResponse),
    TransportFailure(String),
}

#[derive(Debug)]
struct Expectation {
    method: HttpMethod,
    path: String,
    reply: Reply,
}

/// A transport that answers from a queue of expectations.
///
/// Requests must arrive in the order the expectations were declared; a
/// request with no matching expectation panics. Cloning shares the queue, so
/// keep one clone for [`verify`](Self::verify) and give the other to the client.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<ResolvedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with `method` whose URL path is exactly `path`.
    pub fn expect(&self, method: HttpMethod, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<ResolvedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ResolvedRequest) -> Result<TransportResponse, ClientError> {
        self.requests.lock().unwrap().push(request.clone());

        let expectation = self.expectations.lock().unwrap().pop_front();
        let Some(expectation) = expectation else {
            panic!("Unexpected request: {} {}", request.method, request.path());
        };
        if expectation.method != request.method || expectation.path != request.path() {
            panic!(
                "Expected {} {}, got {} {}",
                expectation.method,
                expectation.path,
                request.method,
                request.path()
            );
        }

        match expectation.reply {
            Reply::Response(response) => Ok(response),
            Reply::TransportFailure(message) => Err(ClientError::TransportError(Box::new(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message),
            ))),
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: HttpMethod,
    path: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Answers with `status` and `body` serialized as JSON.
    pub fn return_json(self, status: u16, body: Value) {
        self.push(Reply::Response(TransportResponse::new(status, body.to_string())));
    }

    /// Answers with `status` and a raw body.
    pub fn return_status(self, status: u16, body: impl Into<String>) {
        self.push(Reply::Response(TransportResponse::new(status, body)));
    }

    /// Fails as if no response was received.
    pub fn return_transport_error(self, message: impl Into<String>) {
        self.push(Reply::TransportFailure(message.into()));
    }

    fn push(self, reply: Reply) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            path: self.path,
            reply,
        });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Type alias for the one-shot channel a test answers a request through.
pub type Responder = oneshot::Sender<Result<TransportResponse, ClientError>>;

/// A request captured by a [`ChannelTransport`], waiting for the test to answer.
#[derive(Debug)]
pub struct PendingRequest {
    pub request: ResolvedRequest,
    pub respond_to: Responder,
}

/// A transport that forwards every request to a channel the test reads.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<PendingRequest>,
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, request: ResolvedRequest) -> Result<TransportResponse, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PendingRequest { request, respond_to })
            .await
            .map_err(|_| transport_failure("mock transport closed"))?;
        response
            .await
            .map_err(|_| transport_failure("mock responder dropped"))?
    }
}

fn transport_failure(message: &str) -> ClientError {
    ClientError::TransportError(Box::new(std::io::Error::other(message.to_string())))
}

/// Creates a channel-backed transport and the receiver for asserting requests.
///
/// # Testing Strategy
/// The test owns the receiving end. It can hold requests open to keep several
/// invocations in flight, answer them in any order, or drop a responder to
/// simulate a connection that never returns.
pub fn create_mock_transport(buffer_size: usize) -> (ChannelTransport, mpsc::Receiver<PendingRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelTransport { sender }, receiver)
}

/// Helper to take the next request off the channel.
pub async fn expect_request(receiver: &mut mpsc::Receiver<PendingRequest>) -> Option<(ResolvedRequest, Responder)> {
    receiver
        .recv()
        .await
        .map(|pending| (pending.request, pending.respond_to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::HttpMethod;
    use reqwest::Url;
    use serde_json::json;

    fn request(method: HttpMethod, path: &str) -> ResolvedRequest {
        ResolvedRequest {
            action: "test".to_string(),
            method,
            url: Url::parse(&format!("http://mock.local{path}")).unwrap(),
            query: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_mock_transport_replays_in_order() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "/a").return_json(200, json!({"n": 1}));
        mock.expect(HttpMethod::Post, "/b").return_status(500, "boom");

        let first = mock.send(request(HttpMethod::Get, "/a")).await.unwrap();
        assert_eq!(first, TransportResponse::new(200, r#"{"n":1}"#));

        let second = mock.send(request(HttpMethod::Post, "/b")).await.unwrap();
        assert_eq!(second.status, 500);
        assert!(!second.is_success());

        assert_eq!(mock.requests().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_leftovers() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "/never").return_status(200, "");
        mock.verify();
    }

    #[tokio::test]
    async fn test_channel_transport_round_trip() {
        let (transport, mut receiver) = create_mock_transport(4);

        let task = tokio::spawn(async move { transport.send(request(HttpMethod::Get, "/x")).await });

        let (req, responder) = expect_request(&mut receiver).await.expect("Expected request");
        assert_eq!(req.path(), "/x");
        responder.send(Ok(TransportResponse::new(204, ""))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().status, 204);
    }

    #[tokio::test]
    async fn test_dropped_responder_is_transport_error() {
        let (transport, mut receiver) = create_mock_transport(4);

        let task = tokio::spawn(async move { transport.send(request(HttpMethod::Get, "/x")).await });
        let (_req, responder) = expect_request(&mut receiver).await.expect("Expected request");
        drop(responder);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(ClientError::TransportError(_))));
    }
}
