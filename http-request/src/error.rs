use reqwest::StatusCode;

/// Message recorded when the server answers with a non-success status.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed!";

/// Message recorded when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// A response arrived, but its status was outside 200-299.
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    RequestFailed(StatusCode),
    /// The request could not be built or sent, or the body was not JSON.
    #[error("{}", .0.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    TransportOrParse(Option<String>),
}

impl RequestError {
    /// A transport or parse failure with the given message. An empty message
    /// is treated as no message at all.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::TransportOrParse(None)
        } else {
            Self::TransportOrParse(Some(message))
        }
    }

    /// The text stored in the helper's error state for this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        Self::failure(e.to_string())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        Self::failure(e.to_string())
    }
}
