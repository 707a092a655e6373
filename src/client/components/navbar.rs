use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::TidepoolTitleButton;
use crate::client::router::Route;
use crate::client::store::session::SessionState;

#[component]
pub fn Navbar() -> Element {
    let session = use_context::<Store<SessionState>>();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                TidepoolTitleButton {}
            }
            div {
                class: "navbar-end",
                if session.read().user.is_some() {
                    ul { class: "flex gap-2 items-center",
                        li {
                            Link {
                                to: Route::Explore {},
                                class: "btn btn-ghost",
                                "Explore"
                            }
                        }
                        li {
                            Link {
                                to: Route::Profile {},
                                class: "btn btn-ghost",
                                "Profile"
                            }
                        }
                        li {
                            LogoutButton {}
                        }
                    }
                } else {
                    ul { class: "flex gap-2 items-center",
                        li {
                            Link {
                                to: Route::Login {},
                                class: "btn btn-primary w-28",
                                "Login"
                            }
                        }
                        li {
                            Link {
                                to: Route::Register {},
                                class: "btn btn-outline w-28",
                                "Register"
                            }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}

/// Session teardown point. Clearing the store re-renders the tree, which
/// sends the guard's redirect for whatever guarded page was showing.
#[component]
pub fn LogoutButton() -> Element {
    let mut session = use_context::<Store<SessionState>>();

    rsx! {
        button {
            class: "btn btn-outline",
            onclick: move |_| {
                tracing::debug!("logout requested from navbar");
                session.write().sign_out();
            },
            "Logout"
        }
    }
}
