//! # Endpoint Table
//!
//! A [`ResourceEndpoint`] is a fixed base URL plus a table of named
//! [`ActionDescriptor`]s. Each descriptor binds a logical action name to one
//! HTTP verb and one [`PathTemplate`], with optional defaults for the
//! template's placeholders.
//!
//! # Architecture Note
//! The endpoint is the only place where the remote API's shape is described.
//! It is built once through [`EndpointBuilder`], then shared read-only
//! (usually behind an `Arc`) by every client for the life of the process.
//! There are no setters: once built, the table never changes.
//!
//! ```rust
//! use remote_action::{ActionDescriptor, HttpMethod, ResourceEndpoint};
//!
//! let endpoint = ResourceEndpoint::builder("http://localhost:9000/api/open-amt")
//!     .action(ActionDescriptor::new("submit", HttpMethod::Post, "/:id/:action"))
//!     .action(
//!         ActionDescriptor::new("info", HttpMethod::Get, "/:id/:action")
//!             .default_param("id", "@id")
//!             .default_param("action", "info"),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert!(endpoint.action("info").is_some());
//! assert!(endpoint.action("delete").is_none());
//! ```

use crate::error::EndpointError;
use crate::template::PathTemplate;
use reqwest::Url;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The HTTP verbs an action may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Whether leftover parameters travel in the body (`true`) or the query string.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Where a placeholder's value comes from when the caller does not supply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamDefault {
    /// A fixed value.
    Literal(String),
    /// The caller's value for another field, written `@field`.
    FromField(String),
}

impl ParamDefault {
    /// Parses the `@field` marker; anything else is a literal.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('@') {
            Some(field) => ParamDefault::FromField(field.to_string()),
            None => ParamDefault::Literal(raw.to_string()),
        }
    }
}

impl From<&str> for ParamDefault {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for ParamDefault {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

/// Describes one logical remote operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    name: String,
    method: HttpMethod,
    path: PathTemplate,
    defaults: BTreeMap<String, ParamDefault>,
}

impl ActionDescriptor {
    pub fn new(name: impl Into<String>, method: HttpMethod, path_template: &str) -> Self {
        Self {
            name: name.into(),
            method,
            path: PathTemplate::parse(path_template),
            defaults: BTreeMap::new(),
        }
    }

    /// Adds a default for `placeholder`. A value starting with `@` reads the
    /// caller's field of that name at call time.
    pub fn default_param(mut self, placeholder: impl Into<String>, value: impl Into<ParamDefault>) -> Self {
        self.defaults.insert(placeholder.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &PathTemplate {
        &self.path
    }

    pub fn default_for(&self, placeholder: &str) -> Option<&ParamDefault> {
        self.defaults.get(placeholder)
    }
}

/// A fixed base URL and its immutable table of actions.
#[derive(Debug, Clone)]
pub struct ResourceEndpoint {
    base_url: Url,
    actions: HashMap<String, ActionDescriptor>,
}

impl ResourceEndpoint {
    pub fn builder(base_url: impl Into<String>) -> EndpointBuilder {
        EndpointBuilder {
            base_url: base_url.into(),
            actions: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn action(&self, name: &str) -> Option<&ActionDescriptor> {
        self.actions.get(name)
    }

    /// Registered action names, sorted.
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Collects descriptors and validates them into a [`ResourceEndpoint`].
#[derive(Debug)]
pub struct EndpointBuilder {
    base_url: String,
    actions: Vec<ActionDescriptor>,
}

impl EndpointBuilder {
    pub fn action(mut self, descriptor: ActionDescriptor) -> Self {
        self.actions.push(descriptor);
        self
    }

    pub fn build(self) -> Result<ResourceEndpoint, EndpointError> {
        let base_url = Url::parse(&self.base_url).map_err(|e| EndpointError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(EndpointError::InvalidBaseUrl {
                url: self.base_url,
                reason: "URL cannot be a base".to_string(),
            });
        }

        let mut actions = HashMap::with_capacity(self.actions.len());
        for descriptor in self.actions {
            let name = descriptor.name.clone();
            if actions.insert(name.clone(), descriptor).is_some() {
                return Err(EndpointError::DuplicateAction(name));
            }
        }

        Ok(ResourceEndpoint { base_url, actions })
    }
}
