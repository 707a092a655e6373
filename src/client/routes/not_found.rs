use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-2",
            p { class: "text-2xl",
                "404"
            }
            p {
                "There is no page at /{path}"
            }
            Link {
                to: Route::Home {},
                class: "btn btn-outline",
                "Back to Home"
            }
        }
    )
}
