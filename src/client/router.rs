use dioxus::prelude::*;

use crate::client::{
    components::{Navbar, PostsNav, RequireSession},
    routes::{CreatePost, Explore, Home, Login, NotFound, Posts, Profile, Register},
};

#[cfg(test)]
mod tests;

/// Route table for the default shell. `/`, `/profile`, and `/explore` only
/// render with a session present; everything else is public.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

        #[layout(RequireSession)]

        #[route("/")]
        Home {},

        #[route("/profile")]
        Profile {},

        #[route("/explore")]
        Explore {},

        #[end_layout]

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Whether rendering this destination requires a signed-in user.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Home {} | Route::Profile {} | Route::Explore {}
        )
    }
}

/// Route table for the posts shell. No wildcard: an undefined path fails to
/// match and renders nothing.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum PostsRoute {
    #[layout(PostsNav)]

    #[route("/")]
    Home {},

    #[route("/posts")]
    Posts {},

    #[route("/create")]
    CreatePost {},
}
