//! # Messages
//!
//! This module defines the values that flow through an invocation:
//! the caller's [`ActionParams`], the [`ResolvedRequest`] handed to a
//! [`Transport`](crate::Transport), and the raw [`TransportResponse`] it returns.

use crate::endpoint::HttpMethod;
use reqwest::Url;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The caller-supplied parameter bag for one invocation.
///
/// Keys matching a path placeholder fill that placeholder. Everything else
/// becomes the request body or query string, depending on the verb.
/// `null` values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionParams {
    values: BTreeMap<String, Value>,
}

impl ActionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// ```rust
    /// use remote_action::ActionParams;
    ///
    /// let params = ActionParams::new().with("id", 42).with("force", true);
    /// assert_eq!(params.len(), 2);
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// The value for `key`, skipping `null`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds params from a JSON object. Returns `None` for any other JSON value.
    pub fn from_object(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map.into()),
            _ => None,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ActionParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<Map<String, Value>> for ActionParams {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

/// A fully-resolved request, ready to put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    /// Name of the action that produced this request.
    pub action: String,
    pub method: HttpMethod,
    pub url: Url,
    pub query: Vec<(String, String)>,
    /// JSON body, only for verbs that carry one and only when params are left over.
    pub body: Option<Value>,
}

impl ResolvedRequest {
    /// The URL path, e.g. `/api/open-amt/42/info`.
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// The raw answer from a transport: a status code and the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_from_json_object() {
        let params = ActionParams::from_object(json!({"id": 7, "mode": "ccm", "note": null})).unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("id"), Some(&json!(7)));
        assert_eq!(params.get("note"), None);

        assert!(ActionParams::from_object(json!([1, 2])).is_none());
        assert!(ActionParams::from_object(json!("id")).is_none());
    }

    #[test]
    fn test_params_from_map_and_empty() {
        assert!(ActionParams::new().is_empty());
        assert!(ActionParams::from(Map::new()).is_empty());

        let mut map = Map::new();
        map.insert("enabled".to_string(), json!(true));
        let params = ActionParams::from(map);
        assert!(!params.is_empty());
        assert_eq!(params, ActionParams::new().with("enabled", true));
    }

    #[test]
    fn test_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(299, "").is_success());
        assert!(!TransportResponse::new(199, "").is_success());
        assert!(!TransportResponse::new(304, "").is_success());
    }
}
