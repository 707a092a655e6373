use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn Register() -> Element {
    let nav = navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx!(
        Title { "Register | Tidepool" }
        Meta {
            name: "description",
            content: "Create a Tidepool account."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title",
                        "Register"
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-primary w-full",
                            onclick: move |_| {
                                nav.push(Route::Login {});
                            },
                            "Create Account"
                        }
                    }
                    Link {
                        to: Route::Login {},
                        class: "text-sm",
                        "Already registered? Login"
                    }
                }
            }
        }
    )
}
