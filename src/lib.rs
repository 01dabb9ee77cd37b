#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Remote Action Recipe
//!
//! > **A Recipe for Table-driven REST Resources in Rust.**
//!
//! This crate demonstrates a pattern for building small, type-safe clients for
//! REST resources whose operations are declared as data: an action name, an
//! HTTP verb and a path template such as `/:id/:action`.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a table?
//!
//! A resource like `api/open-amt` has a handful of operations that differ only
//! in verb and path. Describing them as rows of a [`ResourceEndpoint`](framework::ResourceEndpoint)
//! means the request building, error classification and logging are written
//! **once**, and a new operation is one more row.
//!
//! ### Why a typed wrapper on top?
//!
//! The generic [`RemoteActionClient`](framework::RemoteActionClient) speaks in
//! strings and JSON. Domain code should not. Each resource gets a wrapper
//! (e.g. [`OpenAmtClient`](open_amt::clients::OpenAmtClient)) that exposes typed
//! methods and a resource-specific error enum.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! The generic layer returns [`ClientError`](framework::ClientError). Each wrapper maps it
//! into its own enum (e.g. `OpenAmtError::EndpointNotFound` for a 404 on `info`).
//!
//! ### 2. Immutable Configuration
//! The endpoint table is built once and shared as `Arc<ResourceEndpoint>`.
//! Nothing mutates it afterwards, so no locks are needed.
//!
//! ### 3. Concurrency Model
//! Every invocation is an independent `async` call. Clients are cheap clones;
//! many requests may be in flight at once, and dropping one aborts it.
//!
//! ### 4. Observability
//! We use `tracing` with an `invoke` span per request.
//! See [`framework::tracing`] for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic machinery: endpoint tables, path templates, the client, the
//! transport seam and the test mocks.
//!
//! ### 2. The Implementation ([`open_amt`])
//! The Open AMT resource built with the recipe: its action table, the typed
//! client, settings and wiring.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Fetch AMT info for environment 1 from a local server
//! RUST_LOG=info cargo run -p open-amt
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test --workspace
//! ```

pub use open_amt;
pub use remote_action as framework;
