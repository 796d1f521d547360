//! New-comment notification payload.

use serde::Serialize;

use crate::domain::comment::Comment;

/// What channels are told about a just-submitted comment.
///
/// Built once per submission and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub content_identifier: String,
    pub author: String,
    pub content: String,
    pub content_title: Option<String>,
}

impl NotificationPayload {
    pub fn from_comment(comment: &Comment, content_title: Option<String>) -> Self {
        Self {
            content_identifier: comment.content_identifier().to_string(),
            author: comment.author().to_string(),
            content: comment.content().to_string(),
            content_title,
        }
    }

    /// The post title when known, otherwise its slug.
    pub fn display_title(&self) -> &str {
        self.content_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.content_identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::ValidInput;

    fn payload(title: Option<&str>) -> NotificationPayload {
        NotificationPayload {
            content_identifier: "hello-world".to_string(),
            author: "Jo".to_string(),
            content: "Nice post!".to_string(),
            content_title: title.map(str::to_string),
        }
    }

    #[test]
    fn display_title_prefers_title() {
        assert_eq!(payload(Some("Hello, World")).display_title(), "Hello, World");
    }

    #[test]
    fn display_title_falls_back_to_slug() {
        assert_eq!(payload(None).display_title(), "hello-world");
        assert_eq!(payload(Some("  ")).display_title(), "hello-world");
    }

    #[test]
    fn built_from_comment_without_email() {
        let comment = Comment::new(
            "hello-world",
            ValidInput {
                author: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                content: "Nice post!".to_string(),
            },
        );
        let payload = NotificationPayload::from_comment(&comment, Some("Hello".to_string()));
        assert_eq!(payload.author, "Jo");
        assert_eq!(payload.content_title.as_deref(), Some("Hello"));
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("jo@x.com"));
    }
}
