//! # Remote Action
//!
//! This crate provides a small, table-driven client for REST resources whose
//! operations are described declaratively: each logical action name maps to
//! one HTTP verb and one path template with `:placeholders`.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Table Layer** ([`ResourceEndpoint`], [`ActionDescriptor`]) - The shape of the remote API,
//!    built once and shared read-only
//! 2. **Resolution Layer** ([`RemoteActionClient`]) - Turns an action name and an
//!    [`ActionParams`] bag into a [`ResolvedRequest`], then classifies the response
//! 3. **Transport Layer** ([`Transport`], [`HttpTransport`]) - Moves bytes
//!
//! Domain crates wrap the generic client in a typed client through the
//! [`ActionClient`] trait, the same way every resource gets its own wrapper.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use remote_action::{ActionDescriptor, ActionParams, HttpMethod, RemoteActionClient, ResourceEndpoint};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = ResourceEndpoint::builder("http://localhost:9000/api/open-amt")
//!         .action(ActionDescriptor::new("submit", HttpMethod::Post, "/:id/:action").default_param("action", "submit"))
//!         .action(
//!             ActionDescriptor::new("info", HttpMethod::Get, "/:id/:action")
//!                 .default_param("id", "@id")
//!                 .default_param("action", "info"),
//!         )
//!         .build()?;
//!
//!     let client = RemoteActionClient::http(Arc::new(endpoint))?;
//!     let info = client.invoke("info", ActionParams::new().with("id", 42)).await?;
//!     println!("{info}");
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - `invoke` is an ordinary `async fn`; the calling task suspends while the
//!   request is in flight and other tasks keep running
//! - Clients are cheap to clone and hold no mutable state, so any number of
//!   invocations may run at once with no ordering between them
//! - Dropping an `invoke` future aborts its request
//! - There are no internal timeouts or retries
//!
//! ## Testing
//!
//! The [`mock`] module provides in-memory transports for fast, deterministic
//! tests of code built on the client.

pub mod client;
pub mod client_trait;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod mock;
pub mod template;
pub mod tracing;
pub mod transport;

// Re-export core types for convenience
pub use client::RemoteActionClient;
pub use client_trait::ActionClient;
pub use endpoint::{ActionDescriptor, EndpointBuilder, HttpMethod, ParamDefault, ResourceEndpoint};
pub use error::{ClientError, EndpointError};
pub use message::{ActionParams, ResolvedRequest, TransportResponse};
pub use template::PathTemplate;
pub use transport::{HttpTransport, Transport};
