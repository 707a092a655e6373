use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::store::session::SessionState;

#[component]
pub fn Profile() -> Element {
    rsx!(
        Title { "Profile | Tidepool" }
        Meta {
            name: "description",
            content: "Your Tidepool profile."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[1440px] p-6 flex justify-center gap-2",
                ProfileCard { }
            }
        }
    )
}

#[component]
pub fn ProfileCard() -> Element {
    let session_store = use_context::<Store<SessionState>>();

    let session = session_store.read();
    let user = session.user.as_ref();

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-96",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Profile"
                }
                div { class: "flex flex-col justify-center items-center p-2",
                    if let Some(user) = user {
                        div { class: "avatar placeholder",
                            div {
                                class: "w-24 rounded-full bg-base-300",
                                p { class: "text-3xl",
                                    {user.username.chars().next().map(String::from).unwrap_or_default()}
                                }
                            }
                        }
                        p {
                            class: "text-lg font-semibold mt-2",
                            "{user.username}"
                        }
                    } else {
                        div {
                            class: "skeleton h-24 w-24 rounded-full"
                        }
                        div {
                            class: "skeleton h-6 w-40 mt-2"
                        }
                    }
                }
            }
        }
    )
}
