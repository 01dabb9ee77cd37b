//! # ActionClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default
//! `invoke` and `invoke_as` methods built on top of a generic [`RemoteActionClient`].
use crate::{ActionParams, ClientError, RemoteActionClient, Transport};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Trait for resource-specific clients to inherit the generic invocation path.
///
/// # Example
///
/// ```rust
/// use remote_action::{ActionClient, ActionDescriptor, ActionParams, ClientError, HttpMethod};
/// use remote_action::{RemoteActionClient, ResourceEndpoint};
/// use remote_action::mock::MockTransport;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct HostError(String);
///
/// struct HostClient {
///     inner: RemoteActionClient<MockTransport>,
/// }
///
/// impl ActionClient<MockTransport> for HostClient {
///     type Error = HostError;
///
///     fn inner(&self) -> &RemoteActionClient<MockTransport> {
///         &self.inner
///     }
///
///     fn map_error(e: ClientError) -> Self::Error {
///         HostError(e.to_string())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let endpoint = ResourceEndpoint::builder("http://mock.local/hosts")
///         .action(ActionDescriptor::new("get", HttpMethod::Get, "/:id"))
///         .build()
///         .unwrap();
///     let client = HostClient { inner: RemoteActionClient::new(Arc::new(endpoint), MockTransport::new()) };
///
///     // invoke() is provided automatically, with errors already mapped.
///     let err = client.invoke("get", ActionParams::new()).await.unwrap_err();
///     assert!(err.0.contains("Missing parameter"));
/// }
/// ```
#[async_trait]
pub trait ActionClient<T: Transport + 'static>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &RemoteActionClient<T>;

    /// Map client errors to the resource-specific error type.
    fn map_error(e: ClientError) -> Self::Error;

    /// Invoke an action by name.
    #[tracing::instrument(skip(self, params))]
    async fn invoke(&self, action: &str, params: ActionParams) -> Result<Value, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().invoke(action, params).await.map_err(Self::map_error)
    }

    /// Invoke an action by name and decode the body into `R`.
    #[tracing::instrument(skip(self, params))]
    async fn invoke_as<R>(&self, action: &str, params: ActionParams) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static,
    {
        tracing::debug!("Sending request");
        self.inner().invoke_as(action, params).await.map_err(Self::map_error)
    }
}
