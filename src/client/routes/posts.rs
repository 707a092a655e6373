use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Posts() -> Element {
    rsx!(
        Title { "Posts | Tidepool" }
        Meta {
            name: "description",
            content: "Recent posts on Tidepool."
        }
        Page { class: "flex flex-col items-center",
            div { class: "flex flex-col gap-4 w-full max-w-[720px] p-6",
                h2 { class: "text-xl",
                    "Posts"
                }
                // Feed placeholder until there is content to show.
                for _ in 0..4 {
                    div { class: "card shadow-sm",
                        div { class: "card-body",
                            div { class: "skeleton h-6 w-48" }
                            div { class: "skeleton h-16 w-full mt-2" }
                        }
                    }
                }
            }
        }
    )
}
