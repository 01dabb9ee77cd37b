//! Data structures exchanged with the Open AMT resource.

pub mod amt_info;

pub use amt_info::*;
