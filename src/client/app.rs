use dioxus::prelude::*;

use crate::client::router::{PostsRoute, Route};
use crate::client::store::session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Default composition root. Provides the session context for the lifetime
/// of the app and mounts the guarded route tree.
#[component]
pub fn App() -> Element {
    let session = use_store(SessionState::default);
    use_context_provider(|| session);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Alternate composition root: the public posts shell. No session context
/// is provided here, nothing in its tree is guarded.
#[component]
pub fn PostsApp() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<PostsRoute> {}
    }
}
