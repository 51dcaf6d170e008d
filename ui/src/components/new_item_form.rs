use http_request::RequestConfig;
use payloads::Item;
use serde_json::{Value, json};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_http;

#[derive(Properties, PartialEq)]
pub struct NewItemFormProps {
    /// Called with the item the backend created.
    pub on_item_added: Callback<Item>,
}

#[function_component]
pub fn NewItemForm(props: &NewItemFormProps) -> Html {
    let http = use_http();
    let name_ref = use_node_ref();

    let onsubmit = {
        let send_request = http.send_request.clone();
        let on_item_added = props.on_item_added.clone();
        let name_ref = name_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(input) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let name = input.value().trim().to_string();
            if name.is_empty() {
                return;
            }

            let on_item_added = on_item_added.clone();
            let apply_data = Callback::from(move |data: Value| {
                match serde_json::from_value::<Item>(data) {
                    Ok(item) => {
                        input.set_value("");
                        on_item_added.emit(item);
                    }
                    Err(e) => tracing::error!("Unexpected item payload: {e}"),
                }
            });
            let config =
                RequestConfig::post_json("/api/items", json!({ "name": name }));
            send_request.emit((config, apply_data));
        })
    };

    html! {
        <form {onsubmit} class="space-y-2">
            <div class="flex gap-2">
                <input
                    ref={name_ref}
                    type="text"
                    placeholder="New item"
                    class="flex-1 px-3 py-2 border border-gray-300 \
                           dark:border-gray-600 rounded-md \
                           bg-white dark:bg-gray-800"
                />
                <button
                    type="submit"
                    disabled={http.is_loading}
                    class="px-4 py-2 rounded-md bg-gray-900 text-white \
                           dark:bg-white dark:text-gray-900 disabled:opacity-50"
                >
                    {if http.is_loading { "Sending..." } else { "Add Item" }}
                </button>
            </div>
            if let Some(error) = &http.error {
                <p class="text-sm text-red-700 dark:text-red-400">{error.clone()}</p>
            }
        </form>
    }
}
