pub mod create_post;
pub mod explore;
pub mod home;
pub mod login;
pub mod not_found;
pub mod posts;
pub mod profile;
pub mod register;

pub use create_post::CreatePost;
pub use explore::Explore;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use posts::Posts;
pub use profile::Profile;
pub use register::Register;
