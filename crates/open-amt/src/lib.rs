//! # Open AMT Client Library
//!
//! This library exposes the Open AMT resource of the container-management
//! server (`api/open-amt`) on top of [`remote_action`].
//!
//! - **[open_amt_resource]**: the action table and the resource's error type
//! - **[model]**: data exchanged with the server ([`AmtInfo`](model::AmtInfo))
//! - **[clients]**: the typed [`OpenAmtClient`](clients::OpenAmtClient)
//! - **[lifecycle]**: settings and wiring

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod open_amt_resource;
