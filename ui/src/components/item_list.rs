use payloads::Item;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    pub items: Vec<Item>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub on_retry: Callback<()>,
}

#[function_component]
pub fn ItemList(props: &ItemListProps) -> Html {
    if let Some(error) = &props.error {
        let on_retry = props.on_retry.reform(|_: MouseEvent| ());
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
                        border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading items: {error}")}
                </p>
                <button
                    onclick={on_retry}
                    class="mt-2 text-sm font-medium text-red-700 \
                           dark:text-red-400 underline"
                >
                    {"Try again"}
                </button>
            </div>
        };
    }

    if props.is_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading items..."}
                </p>
            </div>
        };
    }

    if props.items.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No items found. Start adding some!"}
                </p>
            </div>
        };
    }

    html! {
        <ul class="divide-y divide-gray-200 dark:divide-gray-700">
            {for props.items.iter().map(|item| html! {
                <li key={item.id.to_string()} class="py-3 flex justify-between">
                    <span>{item.name.clone()}</span>
                    <span class="text-sm text-neutral-500">
                        {item.created_at.strftime("%Y-%m-%d %H:%M").to_string()}
                    </span>
                </li>
            })}
        </ul>
    }
}
