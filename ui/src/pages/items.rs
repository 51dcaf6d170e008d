use http_request::RequestConfig;
use payloads::Item;
use serde_json::Value;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::{ItemList, NewItemForm};
use crate::hooks::use_http;

#[function_component]
pub fn ItemsPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let http = use_http();

    let fetch_items = {
        let send_request = http.send_request.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |_: ()| {
            let dispatch = dispatch.clone();
            let apply_data = Callback::from(move |data: Value| {
                match serde_json::from_value::<Vec<Item>>(data) {
                    Ok(items) => dispatch.reduce_mut(|state| state.items = items),
                    Err(e) => tracing::error!("Unexpected items payload: {e}"),
                }
            });
            send_request.emit((RequestConfig::get("/api/items"), apply_data));
        })
    };

    // Load once on mount
    {
        let fetch_items = fetch_items.clone();
        use_effect_with((), move |_| fetch_items.emit(()));
    }

    let on_item_added = Callback::from(move |item: Item| {
        dispatch.reduce_mut(|state| state.items.push(item));
    });

    html! {
        <main class="max-w-2xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                {"Items"}
            </h1>
            <NewItemForm {on_item_added} />
            <ItemList
                items={state.items.clone()}
                is_loading={http.is_loading}
                error={http.error.clone()}
                on_retry={fetch_items}
            />
        </main>
    }
}
