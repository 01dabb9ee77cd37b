use httpmock::prelude::*;
use open_amt::lifecycle::{OpenAmtSettings, OpenAmtSystem};
use open_amt::model::EndpointId;
use open_amt::open_amt_resource::OpenAmtError;
use remote_action::ActionClient;
use serde_json::json;

/// Full end-to-end test against a local HTTP server.
#[tokio::test]
async fn test_info_over_http() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/open-amt/42/info");
        then.status(200).json_body(json!({
            "Endpoint": 42,
            "Text": "Version\t\t: 16.1.25\r\nControl Mode\t: activated in client control mode\r\n"
        }));
    });

    let system = OpenAmtSystem::new(&OpenAmtSettings::new(server.base_url())).expect("Failed to start system");
    let info = system.client.info(EndpointId(42)).await.expect("Failed to fetch info");

    mock.assert();
    assert_eq!(info.endpoint, EndpointId(42));
    assert_eq!(info.field("Control Mode"), Some("activated in client control mode"));
}

#[tokio::test]
async fn test_info_unknown_environment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/open-amt/9/info");
        then.status(404)
            .json_body(json!({"message": "Unable to find an endpoint with the specified identifier inside the database"}));
    });

    let system = OpenAmtSystem::new(&OpenAmtSettings::new(server.base_url())).unwrap();
    let err = system.client.info(EndpointId(9)).await.unwrap_err();

    mock.assert();
    assert!(matches!(err, OpenAmtError::EndpointNotFound(EndpointId(9))));
}

#[tokio::test]
async fn test_submit_posts_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/open-amt/3/submit")
            .json_body(json!({"mode": "ccm", "domain": "amt.example.com"}));
        then.status(200).json_body(json!({"status": "queued"}));
    });

    let system = OpenAmtSystem::new(&OpenAmtSettings::new(server.base_url())).unwrap();
    let result = system
        .client
        .submit(EndpointId(3), None, &json!({"mode": "ccm", "domain": "amt.example.com"}))
        .await
        .expect("Failed to submit");

    mock.assert();
    assert_eq!(result["status"], "queued");
}

#[tokio::test]
async fn test_configure_posts_to_resource_root() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/open-amt")
            .json_body(json!({"enabled": true, "mpsServer": "mps.example.com"}));
        then.status(204);
    });

    let system = OpenAmtSystem::new(&OpenAmtSettings::new(server.base_url())).unwrap();
    let result = system
        .client
        .configure(&json!({"enabled": true, "mpsServer": "mps.example.com"}))
        .await
        .expect("Failed to configure");

    mock.assert();
    assert!(result.is_null());
}

#[tokio::test]
async fn test_server_error_and_unknown_action() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/open-amt/1/info");
        then.status(500).body("Could not pull image from registry");
    });

    let system = OpenAmtSystem::new(&OpenAmtSettings::new(server.base_url())).unwrap();

    let err = system.client.info(EndpointId(1)).await.unwrap_err();
    match err {
        OpenAmtError::Remote { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Could not pull image from registry");
        }
        other => panic!("Expected Remote error, got {other:?}"),
    }

    // The generic path reports unregistered actions without touching the server.
    let err = system
        .client
        .invoke("deactivate", remote_action::ActionParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, OpenAmtError::Client(msg) if msg.contains("Unknown action")));

    mock.assert_calls(1);
}

/// Concurrent requests through clones of one client complete independently.
#[tokio::test]
async fn test_concurrent_info_requests() {
    let server = MockServer::start();
    let mocks: Vec<_> = (1..=5)
        .map(|id| {
            server.mock(move |when, then| {
                when.method(GET).path(format!("/api/open-amt/{id}/info"));
                then.status(200).json_body(json!({"Endpoint": id, "Text": format!("host {id}")}));
            })
        })
        .collect();

    let system = OpenAmtSystem::new(&OpenAmtSettings::new(server.base_url())).unwrap();
    let handles: Vec<_> = (1..=5)
        .map(|id| {
            let client = system.client.clone();
            tokio::spawn(async move { client.info(EndpointId(id)).await })
        })
        .collect();

    for (id, handle) in (1..=5).zip(handles) {
        let info = handle.await.unwrap().expect("Failed to fetch info");
        assert_eq!(info.endpoint, EndpointId(id));
        assert_eq!(info.text, format!("host {id}"));
    }
    for mock in mocks {
        mock.assert();
    }
}
