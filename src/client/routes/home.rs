use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGithub;
use dioxus_free_icons::Icon;

use crate::client::components::Page;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Tidepool Home" }
        Meta {
            name: "description",
            content: "Tidepool, a small place to post and explore."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "Tidepool"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "This is a test instance of Tidepool"
                    }
                    p {
                        "Currently we are testing the application shell: navigation, the
                        session-guarded pages, and the public posts pages. Content and
                        accounts are placeholders while the backend is built out."
                    }
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        a { href: "https://github.com/tidepool-social/tidepool",
                            button {
                                class: "btn btn-outline w-48 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaGithub
                                }
                                p {
                                    "Tidepool GitHub"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
