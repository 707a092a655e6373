use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Page;

#[component]
pub fn CreatePost() -> Element {
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    rsx!(
        Title { "Create Post | Tidepool" }
        Meta {
            name: "description",
            content: "Write a new Tidepool post."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-[720px]",
                div { class: "card-body",
                    h2 { class: "card-title",
                        "Create Post"
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Title",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    textarea {
                        class: "textarea w-full h-40",
                        placeholder: "What's on your mind?",
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                    }
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-primary",
                            // Nowhere to send the post yet.
                            onclick: move |_| {
                                tracing::info!("discarding draft post {:?}", title());
                                title.set(String::new());
                                content.set(String::new());
                            },
                            "Post"
                        }
                    }
                }
            }
        }
    )
}
