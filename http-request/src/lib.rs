//! Send one HTTP request at a time while tracking loading and error state
//! for whoever issued it, typically a UI component.
//!
//! A [`RequestHelper`] owns the state. [`RequestHelper::send_request`] marks
//! it as loading, performs the request described by a [`RequestConfig`],
//! hands the parsed JSON body to a caller-supplied callback on success, and
//! records a message on failure. Errors never reach the caller directly;
//! they are observed by reading [`RequestHelper::error`] after the request
//! settles.
//!
//! ```no_run
//! use http_request::{RequestConfig, RequestHelper};
//!
//! # async fn run() {
//! let helper = RequestHelper::new(reqwest::Client::new());
//! let config = RequestConfig::get("http://127.0.0.1:8000/api/items");
//! helper
//!     .send_request(config, |items| println!("{items}"))
//!     .await;
//! assert!(!helper.is_loading());
//! # }
//! ```

mod config;
mod error;
mod helper;
mod status;
mod transport;

pub use config::RequestConfig;
pub use error::{FALLBACK_MESSAGE, REQUEST_FAILED_MESSAGE, RequestError};
pub use helper::{RequestHelper, begin, settle};
pub use status::{RequestStatus, SharedStatus, StatusSink};
pub use transport::Transport;

pub use reqwest::Url;
