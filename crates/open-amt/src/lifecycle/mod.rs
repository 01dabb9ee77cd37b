//! # System Wiring
//!
//! This module turns [`OpenAmtSettings`] into a ready-to-use
//! [`OpenAmtClient`]. It is the one place where the endpoint table is built,
//! so the rest of the application only ever sees a shared, read-only
//! `Arc<ResourceEndpoint>`.
//!
//! ```rust,no_run
//! use open_amt::lifecycle::{OpenAmtSettings, OpenAmtSystem};
//! use open_amt::model::EndpointId;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let system = OpenAmtSystem::new(&OpenAmtSettings::default())?;
//! let info = system.client.info(EndpointId(1)).await?;
//! println!("{}", info.text);
//! # Ok(())
//! # }
//! ```
//!
//! Clients are cheap clones over the same endpoint and connection pool; hand
//! one to every task that needs it. There is nothing to shut down beyond
//! dropping them.

pub mod config;

pub use config::*;

use crate::clients::OpenAmtClient;
use crate::open_amt_resource;
use remote_action::{ClientError, EndpointError, HttpTransport, RemoteActionClient, ResourceEndpoint, Transport};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// The wired-up Open AMT client and the endpoint table it uses.
pub struct OpenAmtSystem<T: Transport = HttpTransport> {
    pub endpoint: Arc<ResourceEndpoint>,
    pub client: OpenAmtClient<T>,
}

impl OpenAmtSystem<HttpTransport> {
    pub fn new(settings: &OpenAmtSettings) -> Result<Self, StartupError> {
        Self::with_transport(settings, HttpTransport::new()?)
    }
}

impl<T: Transport + 'static> OpenAmtSystem<T> {
    pub fn with_transport(settings: &OpenAmtSettings, transport: T) -> Result<Self, StartupError> {
        let endpoint = Arc::new(open_amt_resource::endpoint(settings.base_url())?);
        info!(base_url = %endpoint.base_url(), actions = ?endpoint.action_names(), "Open AMT endpoint ready");

        let client = OpenAmtClient::new(RemoteActionClient::new(Arc::clone(&endpoint), transport));
        Ok(Self { endpoint, client })
    }
}
