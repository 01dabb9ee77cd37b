//! Host information returned by the `info` action.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for a managed environment (endpoint) on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointId(pub u32);

impl From<u32> for EndpointId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for EndpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// AMT status of an environment's host, as reported by `amtinfo`.
///
/// The server encodes the field names capitalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmtInfo {
    #[serde(rename = "Endpoint")]
    pub endpoint: EndpointId,
    /// Raw `amtinfo` output.
    #[serde(rename = "Text")]
    pub text: String,
}

impl AmtInfo {
    /// Non-empty lines of the `amtinfo` output, trimmed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().map(str::trim).filter(|line| !line.is_empty())
    }

    /// Looks up a `Key: value` line of the output, e.g. `"Version"`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.lines().find_map(|line| {
            let (k, v) = line.split_once(':')?;
            (k.trim().eq_ignore_ascii_case(key)).then(|| v.trim())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_server_shape() {
        let info: AmtInfo = serde_json::from_value(json!({
            "Endpoint": 42,
            "Text": "Version\t\t: 16.1.25\r\nBuild Number\t: 2049\r\n\r\nControl Mode\t: pre-provisioning state\r\n"
        }))
        .unwrap();

        assert_eq!(info.endpoint, EndpointId(42));
        assert_eq!(info.lines().count(), 3);
        assert_eq!(info.field("version"), Some("16.1.25"));
        assert_eq!(info.field("Control Mode"), Some("pre-provisioning state"));
        assert_eq!(info.field("DNS Suffix"), None);
    }
}
