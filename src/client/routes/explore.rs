use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCompass;
use dioxus_free_icons::Icon;

use crate::client::components::Page;

#[component]
pub fn Explore() -> Element {
    rsx!(
        Title { "Explore | Tidepool" }
        Meta {
            name: "description",
            content: "Discover posts and people on Tidepool."
        }
        Page { class: "flex flex-col items-center",
            div { class: "flex items-center gap-2 p-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaCompass
                }
                h2 { class: "text-xl",
                    "Explore"
                }
            }
            // Discovery feed placeholder until there is content to show.
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 w-full max-w-[1440px] p-6",
                for _ in 0..6 {
                    div { class: "card shadow-sm",
                        div { class: "card-body",
                            div { class: "skeleton h-6 w-40" }
                            div { class: "skeleton h-24 w-full mt-2" }
                        }
                    }
                }
            }
        }
    )
}
