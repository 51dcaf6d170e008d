use http_request::Url;
use payloads::Item;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub items: Vec<Item>,
}

/// Address that relative request URLs resolve against: `BACKEND_URL` if it
/// was set at build time, otherwise the page's own origin.
pub fn backend_url() -> Option<Url> {
    let address = match option_env!("BACKEND_URL") {
        Some(url) => url.to_string(),
        None => web_sys::window()?.location().origin().ok()?,
    };
    Url::parse(&address).ok()
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::ItemsPage /> },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
                    <p class="text-gray-600 dark:text-gray-300">{"Page not found"}</p>
                </div>
            </main>
        },
    }
}
