use std::sync::Arc;

use dioxus::prelude::*;

use api_client::{SessionClient, TokenStore};
use shared_types::api_base_url;

mod auth;
mod format;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Where the access token lives on this platform. The browser bundle uses
/// `localStorage`; native builds keep it in memory for the process lifetime.
fn token_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(api_client::BrowserTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(api_client::MemoryTokenStore::new())
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| SessionClient::new(api_base_url()));
    use_context_provider(token_store);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
