use std::collections::HashMap;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::body::{collect_body, parse_json};
use crate::error::Error;

/// Incoming request with the path parameters extracted by the router
pub struct Request {
    inner: hyper::Request<hyper::body::Incoming>,
    params: HashMap<String, String>,
}

impl Request {
    pub fn new(inner: hyper::Request<hyper::body::Incoming>) -> Self {
        Self {
            inner,
            params: HashMap::new(),
        }
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Get a route parameter by name (e.g. /lists/{list_id})
    ///
    /// Returns an error if the parameter is missing, enabling use of the `?`
    /// operator in handlers.
    pub fn param(&self, name: &str) -> Result<&str, Error> {
        self.params
            .get(name)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::param(name))
    }

    /// Get a route parameter parsed as a UUID
    pub fn param_uuid(&self, name: &str) -> Result<Uuid, Error> {
        let raw = self.param(name)?;
        raw.parse()
            .map_err(|_| Error::param_parse(raw.to_string(), "uuid"))
    }

    /// Parse the query string into the target type
    ///
    /// Missing query strings deserialize as an empty form, so target types
    /// should use `Option` or `#[serde(default)]` fields.
    pub fn query<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let raw = self.inner.uri().query().unwrap_or("");
        serde_urlencoded::from_str(raw)
            .map_err(|e| Error::invalid_body(format!("Failed to parse query string: {}", e)))
    }

    /// Parse the request body as JSON
    ///
    /// Consumes the request since the body can only be read once.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let bytes = collect_body(self.inner.into_body()).await?;
        parse_json(&bytes)
    }
}
