//! # Client Errors
//!
//! This module defines the error types used throughout the remote action client.
//! Every failure of [`RemoteActionClient::invoke`](crate::RemoteActionClient::invoke)
//! surfaces as a [`ClientError`]; building a [`ResourceEndpoint`](crate::ResourceEndpoint)
//! fails with an [`EndpointError`].

/// Errors returned by an invocation.
///
/// None of these are retried and none are logged by the client itself.
/// The caller decides what is fatal.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The action name is not registered on the endpoint.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A path placeholder had neither a caller value nor a usable default.
    #[error("Missing parameter `{name}` for action `{action}`")]
    MissingParameter { action: String, name: String },

    /// A path placeholder was given an array, an object, `.` or `..`.
    #[error("Parameter `{name}` cannot be used as a path segment")]
    InvalidParameter { name: String },

    /// The server answered with a non-2xx status.
    #[error("Remote error {status}: {body}")]
    RemoteError { status: u16, body: String },

    /// No response was received.
    #[error("Transport error: {0}")]
    TransportError(Box<dyn std::error::Error + Send + Sync>),

    /// A 2xx body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Status code of a [`ClientError::RemoteError`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RemoteError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::TransportError(Box::new(e))
    }
}

/// Errors raised while building a [`ResourceEndpoint`](crate::ResourceEndpoint).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Duplicate action: {0}")]
    DuplicateAction(String),
}
