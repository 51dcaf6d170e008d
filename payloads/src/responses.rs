use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What the backend received for a request to its echo endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoedRequest {
    pub method: String,
    /// Header names are lowercase.
    pub headers: BTreeMap<String, String>,
    /// `None` when the request had no body, or an empty one.
    pub body: Option<String>,
}

impl EchoedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}
