//! Raw API response handed back to callers

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

use super::request::pretty_json;

/// Status, headers and body of a completed call
///
/// The dispatcher never inspects the status beyond picking a log level, so
/// 4xx/5xx responses arrive here intact.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Drain a reqwest response into an owned value
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body into a typed model
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Body as JSON, or an empty object when absent, null or malformed
    pub fn json_or_empty(&self) -> Value {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(Value::Null) | Err(_) => Value::Object(Default::default()),
            Ok(value) => value,
        }
    }

    /// Body text when it is present but not JSON, e.g. an HTML proxy page
    pub fn raw_text(&self) -> Option<&str> {
        let body = self.body.trim();
        if body.is_empty() || serde_json::from_str::<Value>(body).is_ok() {
            None
        } else {
            Some(body)
        }
    }

    pub fn pretty_json(&self) -> String {
        pretty_json(&self.json_or_empty())
    }
}
