//! SubmitCommentHandler - Command handler for visitor comment submissions.
//!
//! Validate, persist unapproved, then notify. Notification never changes
//! the outcome: once the comment is stored the submission has succeeded.

use std::sync::Arc;

use crate::application::NotificationDispatcher;
use crate::domain::comment::{validate, Comment, CommentError, CommentField, CommentValidationError};
use crate::domain::notification::{DispatchReport, NotificationPayload};
use crate::ports::{CommentRepository, ContentSource};

/// Command to submit a comment on a content item.
#[derive(Debug, Clone)]
pub struct SubmitCommentCommand {
    pub slug: String,
    pub author: String,
    pub email: String,
    pub content: String,
}

/// When notification happens relative to the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Await the dispatch and return its report.
    #[default]
    Inline,
    /// Spawn the dispatch and return immediately.
    Background,
}

/// What became of the new-comment notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    Dispatched(DispatchReport),
    Scheduled,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitCommentResult {
    pub comment: Comment,
    pub notifications: NotificationStatus,
}

pub struct SubmitCommentHandler {
    repository: Arc<dyn CommentRepository>,
    content: Arc<dyn ContentSource>,
    dispatcher: Arc<NotificationDispatcher>,
    mode: DispatchMode,
}

impl SubmitCommentHandler {
    pub fn new(
        repository: Arc<dyn CommentRepository>,
        content: Arc<dyn ContentSource>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            repository,
            content,
            dispatcher,
            mode: DispatchMode::Inline,
        }
    }

    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub async fn handle(&self, cmd: SubmitCommentCommand) -> Result<SubmitCommentResult, CommentError> {
        // 1. Validate
        let slug = cmd.slug.trim();
        if slug.is_empty() {
            return Err(CommentValidationError::MissingField(CommentField::Slug).into());
        }
        let input = validate(&cmd.author, &cmd.email, &cmd.content)?;

        // 2. Persist unapproved
        let comment = self.repository.create(slug, input).await.map_err(|e| {
            tracing::error!(slug = %slug, error = %e, "Failed to store comment");
            e
        })?;
        tracing::info!(
            comment_id = %comment.id(),
            slug = %slug,
            "Comment stored, awaiting moderation"
        );

        // 3. Notify
        let content = self.content.clone();
        let dispatcher = self.dispatcher.clone();
        let stored = comment.clone();
        let delivery = async move { notify(content.as_ref(), &dispatcher, &stored).await };

        let notifications = match self.mode {
            DispatchMode::Inline => NotificationStatus::Dispatched(delivery.await),
            DispatchMode::Background => {
                tokio::spawn(delivery);
                NotificationStatus::Scheduled
            }
        };

        Ok(SubmitCommentResult {
            comment,
            notifications,
        })
    }
}

async fn notify(
    content: &dyn ContentSource,
    dispatcher: &NotificationDispatcher,
    comment: &Comment,
) -> DispatchReport {
    let title = lookup_title(content, comment.content_identifier()).await;
    let payload = NotificationPayload::from_comment(comment, title);
    let report = dispatcher.dispatch(&payload).await;
    tracing::debug!(
        comment_id = %comment.id(),
        sent = report.sent_count(),
        failed = report.failed_count(),
        "Notification dispatch finished"
    );
    report
}

async fn lookup_title(content: &dyn ContentSource, slug: &str) -> Option<String> {
    match content.get(slug).await {
        Ok(page) => page.map(|p| p.item.title),
        Err(e) => {
            tracing::warn!(slug = %slug, error = %e, "Title lookup failed");
            None
        }
    }
}
