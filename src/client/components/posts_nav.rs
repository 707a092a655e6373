use dioxus::prelude::*;

use crate::client::router::PostsRoute;

#[component]
pub fn PostsNav() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "Tidepool"
                    }
                    p { class: "text-xs",
                        "v0.1.0.Alpha-1"
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-2",
                    li {
                        Link {
                            to: PostsRoute::Home {},
                            class: "btn btn-ghost",
                            "Home"
                        }
                    }
                    li {
                        Link {
                            to: PostsRoute::Posts {},
                            class: "btn btn-ghost",
                            "Posts"
                        }
                    }
                    li {
                        Link {
                            to: PostsRoute::CreatePost {},
                            class: "btn btn-ghost",
                            "Create Post"
                        }
                    }
                }
            }
        }

        Outlet::<PostsRoute> {}
    }
}
