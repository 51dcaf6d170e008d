use std::future::Future;

use crate::RequestError;

/// Performs the HTTP exchange for a built request.
///
/// Implemented for [`reqwest::Client`] on native and wasm32 targets. A
/// failure to get any response at all is reported as
/// [`RequestError::TransportOrParse`].
pub trait Transport {
    fn send(
        &self,
        request: reqwest::Request,
    ) -> impl Future<Output = Result<reqwest::Response, RequestError>>;
}

impl Transport for reqwest::Client {
    async fn send(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, RequestError> {
        Ok(self.execute(request).await?)
    }
}
