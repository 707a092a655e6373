use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::guard::{self, RouteDecision};
use crate::client::router::Route;
use crate::client::store::session::SessionState;

/// Layout wrapper for the guarded part of the route tree. Applies the
/// guard's decision for the current destination on every render, so a
/// session change mid-visit takes effect immediately.
#[component]
pub fn RequireSession() -> Element {
    let nav = navigator();
    let session = use_context::<Store<SessionState>>();
    let route = use_route::<Route>();

    let decision = guard::evaluate(&session.read(), &route);
    match decision {
        RouteDecision::Allow => rsx! { Outlet::<Route> {} },
        RouteDecision::Redirect(to) => {
            tracing::debug!("no session for {route:?}, redirecting to login");
            nav.replace(to);
            rsx! { div {} }
        }
    }
}
