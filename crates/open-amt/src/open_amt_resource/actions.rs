//! Actions of the Open AMT resource.
//!
//! Each variant names one row of the endpoint table built in
//! [`open_amt_resource`](crate::open_amt_resource).

use std::fmt;

/// Logical operations exposed under `api/open-amt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAmtAction {
    /// `POST /:id/:action`, `action` defaulting to `submit`.
    Submit,
    /// `GET /:id/info`. Reads the AMT status of one environment's host.
    Info,
    /// `POST` on the resource root. Applies the default Open AMT configuration.
    Configure,
}

impl OpenAmtAction {
    pub const ALL: [OpenAmtAction; 3] = [OpenAmtAction::Submit, OpenAmtAction::Info, OpenAmtAction::Configure];

    pub fn name(self) -> &'static str {
        match self {
            OpenAmtAction::Submit => "submit",
            OpenAmtAction::Info => "info",
            OpenAmtAction::Configure => "configure",
        }
    }
}

impl fmt::Display for OpenAmtAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
