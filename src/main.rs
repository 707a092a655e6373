use tidepool::client;

fn main() {
    #[cfg(feature = "posts-shell")]
    dioxus::launch(client::PostsApp);

    #[cfg(not(feature = "posts-shell"))]
    dioxus::launch(client::App);
}
