//! Comment command and query handlers.

mod list_approved_comments;
mod submit_comment;

pub use list_approved_comments::{ListApprovedCommentsHandler, ListApprovedCommentsQuery};
pub use submit_comment::{
    DispatchMode, NotificationStatus, SubmitCommentCommand, SubmitCommentHandler,
    SubmitCommentResult,
};
