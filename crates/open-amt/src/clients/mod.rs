//! Type-safe wrappers around [`RemoteActionClient`](remote_action::RemoteActionClient).

pub mod open_amt_client;

pub use open_amt_client::*;
