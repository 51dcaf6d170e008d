use std::rc::Rc;

use http_request::{RequestConfig, StatusSink};
use serde_json::Value;
use yew::prelude::*;

/// Loading and error state of the requests a component has sent, plus the
/// callback to send more.
pub struct UseHttpHandle {
    pub is_loading: bool,
    pub error: Option<String>,
    /// Send a request; the second element receives the parsed JSON body if
    /// the request succeeds.
    pub send_request: Callback<(RequestConfig, Callback<Value>)>,
}

struct StateHandles {
    is_loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
}

impl StatusSink for StateHandles {
    fn set_loading(&self, is_loading: bool) {
        self.is_loading.set(is_loading);
    }

    fn set_error(&self, error: Option<String>) {
        self.error.set(error);
    }
}

/// Send HTTP requests from a component while tracking their loading and
/// error state.
///
/// The state belongs to the component and is dropped with it. Requests are
/// fire-and-forget: they run to completion even if the component has moved
/// on, and overlapping requests all write the same state, so the one that
/// settles last wins.
///
/// # Example
///
/// ```rust,ignore
/// #[function_component]
/// fn Items() -> Html {
///     let http = use_http();
///     let items = use_state(Vec::<Item>::new);
///
///     {
///         let send_request = http.send_request.clone();
///         let items = items.clone();
///         use_effect_with((), move |_| {
///             let apply_data = Callback::from(move |data| {
///                 items.set(serde_json::from_value(data).unwrap_or_default());
///             });
///             send_request.emit((RequestConfig::get("/api/items"), apply_data));
///         });
///     }
///
///     if http.is_loading {
///         return html! { <p>{"Loading..."}</p> };
///     }
///     // ...
/// }
/// ```
#[hook]
pub fn use_http() -> UseHttpHandle {
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let send_request = {
        let handles = Rc::new(StateHandles {
            is_loading: is_loading.clone(),
            error: error.clone(),
        });
        let client = use_memo((), |_| reqwest::Client::new());
        let base_url = use_memo((), |_| crate::backend_url());

        use_callback(
            (),
            move |(config, apply_data): (RequestConfig, Callback<Value>), _| {
                http_request::begin(handles.as_ref());

                let handles = handles.clone();
                let client = client.clone();
                let base_url = base_url.clone();
                yew::platform::spawn_local(async move {
                    http_request::settle(
                        &*client,
                        handles.as_ref(),
                        (*base_url).as_ref(),
                        config,
                        |data| apply_data.emit(data),
                    )
                    .await;
                });
            },
        )
    };

    UseHttpHandle {
        is_loading: *is_loading,
        error: (*error).clone(),
        send_request,
    }
}
