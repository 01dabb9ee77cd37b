//! Error types for the Open AMT resource.

use crate::model::EndpointId;
use remote_action::ClientError;
use thiserror::Error;

/// Errors that can occur during Open AMT operations.
#[derive(Debug, Error)]
pub enum OpenAmtError {
    /// The server has no environment with this identifier.
    #[error("Environment not found: {0}")]
    EndpointNotFound(EndpointId),

    /// The caller is not an administrator.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The server rejected the request as malformed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-2xx answer.
    #[error("Open AMT request failed with status {status}: {body}")]
    Remote { status: u16, body: String },

    /// The request never got an answer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A payload did not serialize to a JSON object.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Any other client failure (unknown action, missing parameter, bad response).
    #[error("Client error: {0}")]
    Client(String),
}

impl OpenAmtError {
    /// Maps a client error, attributing 404s to `endpoint` when known.
    pub fn from_client(e: ClientError, endpoint: Option<EndpointId>) -> Self {
        match e {
            ClientError::RemoteError { status: 404, body } => match endpoint {
                Some(id) => OpenAmtError::EndpointNotFound(id),
                None => OpenAmtError::Remote { status: 404, body },
            },
            ClientError::RemoteError { status: 403, body } => OpenAmtError::PermissionDenied(body),
            ClientError::RemoteError { status: 400, body } => OpenAmtError::BadRequest(body),
            ClientError::RemoteError { status, body } => OpenAmtError::Remote { status, body },
            ClientError::TransportError(source) => OpenAmtError::Transport(source.to_string()),
            other => OpenAmtError::Client(other.to_string()),
        }
    }
}

impl From<ClientError> for OpenAmtError {
    fn from(e: ClientError) -> Self {
        Self::from_client(e, None)
    }
}
