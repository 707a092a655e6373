pub mod navbar;
pub mod page;
pub mod posts_nav;
pub mod require_session;
pub mod tidepool_title;

pub use navbar::Navbar;
pub use page::Page;
pub use posts_nav::PostsNav;
pub use require_session::RequireSession;
pub use tidepool_title::TidepoolTitleButton;
