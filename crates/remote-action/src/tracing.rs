//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for binaries built on this
//! crate. The client itself only emits events; it never installs a subscriber.
//!
//! ## What Gets Traced
//!
//! - **Invocations**: an `invoke` span per call, with the action name and the
//!   number of params as fields
//! - **Dispatch**: a `debug` event with the method and resolved URL
//! - **Responses**: a `debug` event with the status, a `trace` event with the body size
//!
//! Failures are returned to the caller, not logged here.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only the application's own logs
//! RUST_LOG=info cargo run
//!
//! # See every dispatched request
//! RUST_LOG=remote_action=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` an `info` call shows up as:
//!
//! ```text
//! DEBUG invoke{action="info" params=1}: Dispatching request method=GET url=http://localhost:9000/api/open-amt/42/info
//! DEBUG invoke{action="info" params=1}: Response received status=200
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans already name the action.
        .compact()
        .init();
}
