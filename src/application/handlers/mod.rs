//! Command and query handlers.

pub mod comments;
pub mod content;

pub use comments::{
    DispatchMode, ListApprovedCommentsHandler, ListApprovedCommentsQuery, NotificationStatus,
    SubmitCommentCommand, SubmitCommentHandler, SubmitCommentResult,
};
pub use content::{GetPostHandler, GetPostQuery, ListPostsHandler, ListPostsQuery};
