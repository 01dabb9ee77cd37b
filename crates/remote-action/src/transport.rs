//! # Transports
//!
//! The [`Transport`] trait is the seam between request resolution and the
//! network. [`RemoteActionClient`](crate::RemoteActionClient) resolves an
//! action into a [`ResolvedRequest`], hands it to a transport, and interprets
//! the returned [`TransportResponse`] itself. Transports only move bytes.
//!
//! [`HttpTransport`] is the production implementation on top of `reqwest`.
//! The [`mock`](crate::mock) module provides in-memory transports for tests.

use crate::error::ClientError;
use crate::message::{ResolvedRequest, TransportResponse};
use async_trait::async_trait;
use tracing::trace;

/// Sends one resolved request and returns the raw response.
///
/// Implementations must return [`ClientError::TransportError`] when no
/// response was received, and must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ResolvedRequest) -> Result<TransportResponse, ClientError>;
}

/// `reqwest`-backed transport.
///
/// The underlying client pools connections and is cheap to clone. No timeout
/// is configured; wrap the call in `tokio::time::timeout` if one is needed.
/// Dropping the future returned by `send` aborts the request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Uses an existing `reqwest` client (shared pool, custom TLS, default headers).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ResolvedRequest) -> Result<TransportResponse, ClientError> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .query(&request.query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        trace!(status, bytes = body.len(), "Response received");

        Ok(TransportResponse { status, body })
    }
}
