//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::{
    DispatchMode, GetPostHandler, ListApprovedCommentsHandler, ListPostsHandler,
    NotificationDispatcher, SubmitCommentHandler,
};
use crate::ports::{CommentRepository, ContentSource};

/// Cloned per request; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub comment_repository: Arc<dyn CommentRepository>,
    pub content_source: Arc<dyn ContentSource>,
    pub dispatcher: Arc<NotificationDispatcher>,
    pub dispatch_mode: DispatchMode,
    pub posts_per_page: u32,
}

impl AppState {
    /// State that notifies in the background, as the server runs.
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        content_source: Arc<dyn ContentSource>,
        dispatcher: Arc<NotificationDispatcher>,
        posts_per_page: u32,
    ) -> Self {
        Self {
            comment_repository,
            content_source,
            dispatcher,
            dispatch_mode: DispatchMode::Background,
            posts_per_page,
        }
    }

    pub fn with_dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.dispatch_mode = mode;
        self
    }

    pub fn submit_comment_handler(&self) -> SubmitCommentHandler {
        SubmitCommentHandler::new(
            self.comment_repository.clone(),
            self.content_source.clone(),
            self.dispatcher.clone(),
        )
        .with_mode(self.dispatch_mode)
    }

    pub fn list_comments_handler(&self) -> ListApprovedCommentsHandler {
        ListApprovedCommentsHandler::new(self.comment_repository.clone())
    }

    pub fn list_posts_handler(&self) -> ListPostsHandler {
        ListPostsHandler::new(self.content_source.clone(), self.posts_per_page)
    }

    pub fn get_post_handler(&self) -> GetPostHandler {
        GetPostHandler::new(self.content_source.clone())
    }
}
