//! # Configuration
//!
//! The only configuration of the Open AMT client is where the server lives.
//! [`OpenAmtSettings`] can be built in code, taken from defaults, or read from
//! a TOML file:
//!
//! ```toml
//! server_url = "https://portainer.example.com"
//! api_path = "api/open-amt"
//! ```
//!
//! Both keys are optional.

use crate::open_amt_resource::API_ENDPOINT_OPEN_AMT;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:9000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the Open AMT resource is served.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenAmtSettings {
    /// Scheme, host and port of the management server.
    pub server_url: String,
    /// Path of the resource below the server root.
    pub api_path: String,
}

impl Default for OpenAmtSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_path: API_ENDPOINT_OPEN_AMT.to_string(),
        }
    }
}

impl OpenAmtSettings {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// The endpoint's base URL: `server_url` and `api_path` joined by one slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            self.api_path.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = OpenAmtSettings::default();
        assert_eq!(settings.base_url(), "http://localhost:9000/api/open-amt");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = OpenAmtSettings::from_toml_str(r#"server_url = "https://mgmt.example.com/""#).unwrap();
        assert_eq!(settings.api_path, "api/open-amt");
        assert_eq!(settings.base_url(), "https://mgmt.example.com/api/open-amt");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = OpenAmtSettings::from_toml_str("base = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_url = \"http://10.0.0.5:9000\"").unwrap();
        writeln!(file, "api_path = \"/custom/amt/\"").unwrap();

        let settings = OpenAmtSettings::load(file.path()).unwrap();
        assert_eq!(settings.base_url(), "http://10.0.0.5:9000/custom/amt");
    }

    #[test]
    fn test_missing_file() {
        let err = OpenAmtSettings::load("/nonexistent/open-amt.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
