use std::future::Future;
use std::rc::Rc;

use reqwest::Url;
use serde_json::Value;

use crate::{
    RequestConfig, RequestError, RequestStatus, SharedStatus, StatusSink,
    Transport,
};

/// Issues requests and tracks their loading and error state.
///
/// One helper belongs to one caller (for example one mounted component).
/// Requests started through it share its state; overlapping requests are
/// not serialized, so whichever settles last determines the final state.
pub struct RequestHelper<T = reqwest::Client> {
    transport: Rc<T>,
    base_url: Option<Url>,
    status: SharedStatus,
}

impl<T: Transport + 'static> RequestHelper<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Rc::new(transport),
            base_url: None,
            status: SharedStatus::default(),
        }
    }

    /// Resolve relative request URLs against `base_url`.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    pub fn status(&self) -> RequestStatus {
        self.status.snapshot()
    }

    /// Start a request.
    ///
    /// The state is marked as loading, with any previous error cleared,
    /// before this returns. The returned future performs the request and
    /// settles the state; `apply_data` is called with the parsed JSON body
    /// only if the request succeeds. Failures are recorded in
    /// [`error`](Self::error) rather than returned.
    #[must_use = "the request is only sent when the returned future is polled"]
    pub fn send_request<F>(
        &self,
        config: RequestConfig,
        apply_data: F,
    ) -> impl Future<Output = ()> + use<T, F>
    where
        F: FnOnce(Value) + 'static,
    {
        begin(&self.status);

        let transport = self.transport.clone();
        let base_url = self.base_url.clone();
        let status = self.status.clone();
        async move {
            settle(
                &*transport,
                &status,
                base_url.as_ref(),
                config,
                apply_data,
            )
            .await
        }
    }
}

/// Mark a request as started.
pub fn begin(sink: &impl StatusSink) {
    sink.set_loading(true);
    sink.set_error(None);
}

/// Perform a request started with [`begin`] and record how it settled.
///
/// `is_loading` is always cleared last, whatever the outcome.
pub async fn settle<T, S, F>(
    transport: &T,
    sink: &S,
    base_url: Option<&Url>,
    config: RequestConfig,
    apply_data: F,
) where
    T: Transport,
    S: StatusSink,
    F: FnOnce(Value),
{
    let method = config.method_or_default().to_owned();
    let url = config.url.clone();
    tracing::debug!(%method, %url, "sending request");

    match fetch_json(transport, base_url, config).await {
        Ok(data) => {
            tracing::debug!(%method, %url, "request succeeded");
            apply_data(data);
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "request failed");
            sink.set_error(Some(e.message()));
        }
    }

    sink.set_loading(false);
}

async fn fetch_json<T: Transport>(
    transport: &T,
    base_url: Option<&Url>,
    config: RequestConfig,
) -> Result<Value, RequestError> {
    let request = config.into_request(base_url)?;
    let response = transport.send(request).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::RequestFailed(status));
    }
    Ok(response.json::<Value>().await?)
}
