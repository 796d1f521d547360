//! Content query handlers.

mod get_post;
mod list_posts;

pub use get_post::{GetPostHandler, GetPostQuery};
pub use list_posts::{ListPostsHandler, ListPostsQuery};
