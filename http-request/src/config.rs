use std::collections::BTreeMap;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::RequestError;

/// Description of one HTTP call.
///
/// Only `url` is required. A missing `method` means `GET`, missing `headers`
/// means none are sent, and a missing `body` means the request has no body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Sent as JSON text when present. `null`, `false`, zero and `""` count
    /// as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    /// A `POST` carrying `body` as JSON, with a matching `Content-Type`.
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self::new(url)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(body)
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The method this config will be sent with. An empty method means
    /// `GET`.
    pub fn method_or_default(&self) -> &str {
        self.method
            .as_deref()
            .filter(|method| !method.is_empty())
            .unwrap_or("GET")
    }

    /// The body that will be sent, if any.
    pub fn body_to_send(&self) -> Option<&Value> {
        self.body.as_ref().filter(|body| !is_falsy(body))
    }

    /// Build the request this config describes.
    ///
    /// Relative URLs are resolved against `base`; without a base the URL
    /// must be absolute. Only the configured headers are set. `GET` and
    /// `HEAD` requests cannot carry a body.
    pub fn into_request(
        self,
        base: Option<&Url>,
    ) -> Result<reqwest::Request, RequestError> {
        let url = match base {
            Some(base) => base.join(&self.url),
            None => Url::parse(&self.url),
        }
        .map_err(|e| {
            RequestError::failure(format!("Invalid URL {:?}: {e}", self.url))
        })?;
        let method = parse_method(self.method_or_default())?;

        let mut request = reqwest::Request::new(method, url);
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| RequestError::failure(e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| RequestError::failure(e.to_string()))?;
            request.headers_mut().insert(name, value);
        }
        if let Some(body) = self.body_to_send() {
            let method = request.method();
            if *method == Method::GET || *method == Method::HEAD {
                return Err(RequestError::failure(
                    "Request with GET/HEAD method cannot have body.",
                ));
            }
            let text = serde_json::to_string(body)?;
            *request.body_mut() = Some(text.into());
        }
        Ok(request)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Standard methods are matched case-insensitively, like browsers do for
/// `fetch`. Anything else is sent verbatim.
fn parse_method(method: &str) -> Result<Method, RequestError> {
    const NORMALIZED: [&str; 6] =
        ["DELETE", "GET", "HEAD", "OPTIONS", "POST", "PUT"];

    let method = NORMALIZED
        .into_iter()
        .find(|standard| standard.eq_ignore_ascii_case(method))
        .unwrap_or(method);
    Method::from_bytes(method.as_bytes())
        .map_err(|e| RequestError::failure(e.to_string()))
}
