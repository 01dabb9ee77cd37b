//! # Open AMT Client
//!
//! Provides a high-level API for the Open AMT resource.
//! It wraps a `RemoteActionClient` and exposes domain-specific methods.
use crate::model::{AmtInfo, EndpointId};
use crate::open_amt_resource::{OpenAmtAction, OpenAmtError};
use async_trait::async_trait;
use remote_action::{ActionClient, ActionParams, ClientError, HttpTransport, RemoteActionClient, Transport};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Client for the Open AMT resource.
pub struct OpenAmtClient<T: Transport = HttpTransport> {
    inner: RemoteActionClient<T>,
}

impl<T: Transport> Clone for OpenAmtClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[async_trait]
impl<T: Transport + 'static> ActionClient<T> for OpenAmtClient<T> {
    type Error = OpenAmtError;

    fn inner(&self) -> &RemoteActionClient<T> {
        &self.inner
    }

    fn map_error(e: ClientError) -> Self::Error {
        OpenAmtError::from(e)
    }
}

impl<T: Transport + 'static> OpenAmtClient<T> {
    pub fn new(inner: RemoteActionClient<T>) -> Self {
        Self { inner }
    }

    /// Fetch the AMT status of an environment's host.
    #[instrument(skip(self))]
    pub async fn info(&self, id: EndpointId) -> Result<AmtInfo, OpenAmtError> {
        debug!("Requesting AMT info for environment {}", id);
        let params = ActionParams::new().with("id", id.0);
        self.inner
            .invoke_as(OpenAmtAction::Info.name(), params)
            .await
            .map_err(|e| OpenAmtError::from_client(e, Some(id)))
    }

    /// Submit `payload` to an environment.
    ///
    /// `action` overrides the trailing path segment, which defaults to `submit`.
    /// The payload must serialize to a JSON object; its fields form the body.
    #[instrument(skip(self, payload))]
    pub async fn submit<P>(&self, id: EndpointId, action: Option<&str>, payload: &P) -> Result<Value, OpenAmtError>
    where
        P: Serialize + ?Sized,
    {
        let mut params = object_params(payload)?;
        params.insert("id", id.0);
        if let Some(action) = action {
            params.insert("action", action);
        }
        debug!(fields = params.len(), "Submitting to environment {}", id);
        self.inner
            .invoke(OpenAmtAction::Submit.name(), params)
            .await
            .map_err(|e| OpenAmtError::from_client(e, Some(id)))
    }

    /// Apply the default Open AMT configuration on the server.
    #[instrument(skip(self, settings))]
    pub async fn configure<P>(&self, settings: &P) -> Result<Value, OpenAmtError>
    where
        P: Serialize + ?Sized,
    {
        let params = object_params(settings)?;
        debug!(fields = params.len(), "Configuring Open AMT");
        self.invoke(OpenAmtAction::Configure.name(), params).await
    }
}

fn object_params<P: Serialize + ?Sized>(payload: &P) -> Result<ActionParams, OpenAmtError> {
    let value = serde_json::to_value(payload).map_err(|e| OpenAmtError::InvalidPayload(e.to_string()))?;
    ActionParams::from_object(value).ok_or_else(|| OpenAmtError::InvalidPayload("expected a JSON object".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::open_amt_resource;
    use remote_action::mock::MockTransport;
    use remote_action::HttpMethod;
    use serde_json::json;
    use std::sync::Arc;

    fn client(mock: &MockTransport) -> OpenAmtClient<MockTransport> {
        let endpoint = open_amt_resource::endpoint("http://mock.local/api/open-amt").unwrap();
        OpenAmtClient::new(RemoteActionClient::new(Arc::new(endpoint), mock.clone()))
    }

    #[tokio::test]
    async fn test_info_decodes_amt_info() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "/api/open-amt/42/info")
            .return_json(200, json!({"Endpoint": 42, "Text": "Version: 16.1.25"}));

        let info = client(&mock).info(EndpointId(42)).await.unwrap();
        assert_eq!(info.endpoint, EndpointId(42));
        assert_eq!(info.field("Version"), Some("16.1.25"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_info_not_found() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "/api/open-amt/5/info")
            .return_json(404, json!({"message": "Unable to find an endpoint"}));

        let err = client(&mock).info(EndpointId(5)).await.unwrap_err();
        assert!(matches!(err, OpenAmtError::EndpointNotFound(EndpointId(5))));
    }

    #[tokio::test]
    async fn test_submit_with_custom_action() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Post, "/api/open-amt/7/activate")
            .return_json(200, json!({"ok": true}));

        let result = client(&mock)
            .submit(EndpointId(7), Some("activate"), &json!({"mode": "ccm"}))
            .await
            .unwrap();
        assert_eq!(result, json!({"ok": true}));

        let requests = mock.requests();
        assert_eq!(requests[0].body, Some(json!({"mode": "ccm"})));
    }

    #[tokio::test]
    async fn test_submit_rejects_non_object_payload() {
        let mock = MockTransport::new();
        let err = client(&mock).submit(EndpointId(7), None, &[1, 2, 3]).await.unwrap_err();
        assert!(matches!(err, OpenAmtError::InvalidPayload(_)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_configure_maps_permission_denied() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Post, "/api/open-amt").return_status(403, "Access denied");

        let err = client(&mock).configure(&json!({"enabled": true})).await.unwrap_err();
        match err {
            OpenAmtError::PermissionDenied(body) => assert_eq!(body, "Access denied"),
            other => panic!("Expected PermissionDenied, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "/api/open-amt/1/info")
            .return_transport_error("connection refused");

        let err = client(&mock).info(EndpointId(1)).await.unwrap_err();
        assert!(matches!(err, OpenAmtError::Transport(msg) if msg.contains("connection refused")));
    }
}
