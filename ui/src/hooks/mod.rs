pub mod use_http;

pub use use_http::{UseHttpHandle, use_http};
