//! # Open AMT Resource
//!
//! The action table for the server's Open AMT (Intel Active Management
//! Technology) routes:
//!
//! | action | method | path template | defaults |
//! |---|---|---|---|
//! | `submit` | POST | `/:id/:action` | `action = "submit"` |
//! | `info` | GET | `/:id/:action` | `id = @id`, `action = "info"` |
//! | `configure` | POST | (resource root) | |
//!
//! The table is built once per process by [`endpoint`] and shared by every
//! [`OpenAmtClient`](crate::clients::OpenAmtClient).

pub mod actions;
pub mod error;

pub use actions::*;
pub use error::*;

use remote_action::{ActionDescriptor, EndpointError, HttpMethod, ResourceEndpoint};

/// Path of the resource relative to the server root.
pub const API_ENDPOINT_OPEN_AMT: &str = "api/open-amt";

/// Builds the Open AMT endpoint table rooted at `base_url`
/// (e.g. `http://localhost:9000/api/open-amt`).
pub fn endpoint(base_url: impl Into<String>) -> Result<ResourceEndpoint, EndpointError> {
    ResourceEndpoint::builder(base_url)
        .action(
            ActionDescriptor::new(OpenAmtAction::Submit.name(), HttpMethod::Post, "/:id/:action")
                .default_param("action", "submit"),
        )
        .action(
            ActionDescriptor::new(OpenAmtAction::Info.name(), HttpMethod::Get, "/:id/:action")
                .default_param("id", "@id")
                .default_param("action", "info"),
        )
        .action(ActionDescriptor::new(OpenAmtAction::Configure.name(), HttpMethod::Post, ""))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use remote_action::mock::MockTransport;
    use remote_action::{ActionParams, RemoteActionClient};
    use std::sync::Arc;

    fn client() -> RemoteActionClient<MockTransport> {
        let endpoint = endpoint("http://localhost:9000/api/open-amt").unwrap();
        RemoteActionClient::new(Arc::new(endpoint), MockTransport::new())
    }

    #[test]
    fn test_every_action_is_registered() {
        let endpoint = endpoint("http://localhost:9000/api/open-amt").unwrap();
        for action in OpenAmtAction::ALL {
            assert!(endpoint.action(action.name()).is_some(), "{action} missing");
        }
    }

    #[test]
    fn test_info_resolves_to_get() {
        let request = client().resolve("info", &ActionParams::new().with("id", "42")).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.as_str(), "http://localhost:9000/api/open-amt/42/info");
    }

    #[test]
    fn test_submit_resolves_to_post() {
        let request = client().resolve("submit", &ActionParams::new().with("id", "7")).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.as_str(), "http://localhost:9000/api/open-amt/7/submit");
    }

    #[test]
    fn test_configure_targets_resource_root() {
        let params = ActionParams::new().with("enabled", true);
        let request = client().resolve("configure", &params).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.as_str(), "http://localhost:9000/api/open-amt");
        assert_eq!(request.body, Some(serde_json::json!({"enabled": true})));
    }
}
