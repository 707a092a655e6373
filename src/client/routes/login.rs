use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::SessionState;
use crate::model::user::UserDto;

#[component]
pub fn Login() -> Element {
    let nav = navigator();
    let mut session = use_context::<Store<SessionState>>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx!(
        Title { "Login | Tidepool" }
        Meta {
            name: "description",
            content: "Sign in to Tidepool."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title",
                        "Login"
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
                            // No account backend yet; submitting records the
                            // name locally and that is the whole session.
                            onclick: move |_| {
                                session.write().sign_in(UserDto {
                                    id: 1,
                                    username: username(),
                                });
                                nav.push(Route::Home {});
                            },
                            "Login"
                        }
                    }
                    Link {
                        to: Route::Register {},
                        class: "text-sm",
                        "No account yet? Register"
                    }
                }
            }
        }
    )
}
