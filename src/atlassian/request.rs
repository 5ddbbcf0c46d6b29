//! Chainable request description shared by every endpoint call
//!
//! A [`RequestSpec`] carries the product base URL, the accumulated query
//! parameters, the payload and the headers of one pending call. It is built
//! with owned `with_*` methods and consumed by a single dispatch on
//! [`AtlassianClient`](crate::atlassian::AtlassianClient).

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::config::api;
use crate::error::{AtlError, Result};

/// Request body of a pending call
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// No body
    #[default]
    Empty,
    /// JSON document, serialized when sent
    Json(Value),
    /// Pre-serialized body sent verbatim
    Raw(String),
}

impl Payload {
    /// True when there is nothing worth sending or logging
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Empty => true,
            Payload::Json(Value::Null) => true,
            Payload::Json(Value::Object(map)) => map.is_empty(),
            Payload::Json(_) => false,
            Payload::Raw(body) => body.is_empty(),
        }
    }

    /// Serialized request body, if any
    pub fn to_body(&self) -> Option<String> {
        match self {
            Payload::Empty => None,
            Payload::Json(value) => Some(value.to_string()),
            Payload::Raw(body) => Some(body.clone()),
        }
    }

    /// Pretty-printed form for logs. Raw bodies holding JSON are re-indented.
    pub fn pretty(&self) -> String {
        match self {
            Payload::Empty => String::new(),
            Payload::Json(value) => pretty_json(value),
            Payload::Raw(body) => serde_json::from_str::<Value>(body)
                .map(|value| pretty_json(&value))
                .unwrap_or_else(|_| body.clone()),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Json(value)
    }
}

impl From<String> for Payload {
    fn from(body: String) -> Self {
        Payload::Raw(body)
    }
}

impl From<&str> for Payload {
    fn from(body: &str) -> Self {
        Payload::Raw(body.to_string())
    }
}

/// Pretty-print a JSON value with the indentation used across logs and output
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One pending HTTP call: base URL, queries, payload and headers
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    base_url: String,
    queries: BTreeMap<String, String>,
    payload: Payload,
    headers: BTreeMap<String, String>,
}

impl RequestSpec {
    /// Create a spec for the given base URL with JSON default headers
    ///
    /// The base URL must be a non-empty absolute URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(AtlError::InvalidUrl("base URL is empty".to_string()));
        }

        let parsed =
            Url::parse(&base_url).map_err(|e| AtlError::InvalidUrl(format!("'{}': {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(AtlError::InvalidUrl(format!(
                "'{}' cannot be used as a base URL",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            queries: BTreeMap::new(),
            payload: Payload::Empty,
            headers: default_headers(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn queries(&self) -> &BTreeMap<String, String> {
        &self.queries
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Replace the payload wholesale
    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Replace the payload with the JSON form of a typed request body
    pub fn with_json<T: Serialize>(self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        Ok(self.with_payload(value))
    }

    /// Merge query parameters; incoming keys overwrite existing ones
    pub fn with_queries<I, K, V>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in queries {
            self.queries.insert(key.into(), value.into());
        }
        self
    }

    /// Merge a single query parameter
    pub fn with_query(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_queries([(key.into(), value.into())])
    }

    /// Replace the headers
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    /// Serialize queries as `k=v&k2=v2`, percent-encoding keys and values
    pub fn query_string(&self) -> String {
        self.queries
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Join base URL and endpoint with exactly one `/`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, endpoint)
        }
    }

    /// Fully qualified URL for an endpoint, including the query string
    pub fn url(&self, endpoint: &str) -> String {
        let mut url = self.endpoint_url(endpoint);
        let query = self.query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

fn default_headers() -> BTreeMap<String, String> {
    api::DEFAULT_HEADERS
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
