//! HTTP DTOs for comment endpoints.
//!
//! Emails are accepted on submission and never returned.

use serde::{Deserialize, Serialize};

use crate::domain::comment::Comment;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/comments`.
///
/// Absent fields deserialize as empty so they are reported by validation
/// rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitCommentRequest {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub content: String,
}

/// Query of `GET /api/comments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCommentsParams {
    pub slug: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

pub const SUBMITTED_MESSAGE: &str = "Comment submitted! It will appear after moderation.";

/// Outcome of a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCommentResponse {
    pub success: bool,
    pub message: String,
}

impl SubmitCommentResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: SUBMITTED_MESSAGE.to_string(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Public view of an approved comment.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: String,
    pub content: String,
    pub submitted_at: String,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().to_string(),
            author: comment.author().to_string(),
            content: comment.content().to_string(),
            submitted_at: comment.submitted_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::ValidInput;

    #[test]
    fn comment_response_omits_email() {
        let comment = Comment::new(
            "hello",
            ValidInput {
                author: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                content: "Nice".to_string(),
            },
        );
        let json = serde_json::to_value(CommentResponse::from(&comment)).unwrap();
        assert_eq!(json["author"], "Jo");
        assert!(json.get("email").is_none());
        assert!(!json.to_string().contains("jo@x.com"));
    }

    #[test]
    fn missing_request_fields_default_to_empty() {
        let request: SubmitCommentRequest = serde_json::from_str(r#"{"slug":"hello"}"#).unwrap();
        assert_eq!(request.slug, "hello");
        assert!(request.author.is_empty());
    }
}
