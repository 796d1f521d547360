//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Comment submission is the only write path; everything else is a query.

pub mod handlers;
pub mod notification_dispatcher;

pub use handlers::{
    DispatchMode, GetPostHandler, GetPostQuery, ListApprovedCommentsHandler,
    ListApprovedCommentsQuery, ListPostsHandler, ListPostsQuery, NotificationStatus,
    SubmitCommentCommand, SubmitCommentHandler, SubmitCommentResult,
};
pub use notification_dispatcher::NotificationDispatcher;
