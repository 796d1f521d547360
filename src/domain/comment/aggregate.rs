//! Comment entity.
//!
//! A comment belongs to one content item (by slug) and stays hidden from
//! readers until a moderator approves it outside this service.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CommentId, Timestamp};

use super::validation::ValidInput;

/// A reader comment on a content item.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `author`, `email` and `content` are trimmed and non-empty
/// - newly created comments are never approved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    content_identifier: String,
    author: String,
    email: String,
    content: String,
    submitted_at: Timestamp,
    #[serde(default)]
    approved: bool,
}

impl Comment {
    /// Create a new, unapproved comment from validated input.
    pub fn new(content_identifier: impl Into<String>, input: ValidInput) -> Self {
        Self {
            id: CommentId::new(),
            content_identifier: content_identifier.into(),
            author: input.author,
            email: input.email,
            content: input.content,
            submitted_at: Timestamp::now(),
            approved: false,
        }
    }

    /// Reconstitute a comment from persistence (no validation).
    pub fn reconstitute(
        id: CommentId,
        content_identifier: String,
        author: String,
        email: String,
        content: String,
        submitted_at: Timestamp,
        approved: bool,
    ) -> Self {
        Self {
            id,
            content_identifier,
            author,
            email,
            content,
            submitted_at,
            approved,
        }
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    /// Slug of the content item this comment belongs to.
    pub fn content_identifier(&self) -> &str {
        &self.content_identifier
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Submitter's address. Never shown to readers.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// True if readers of `content_identifier` may see this comment.
    pub fn is_visible_on(&self, content_identifier: &str) -> bool {
        self.approved && self.content_identifier == content_identifier
    }

    /// Mark the comment approved. Used by moderation tooling and tests.
    pub fn approve(&mut self) {
        self.approved = true;
    }
}
