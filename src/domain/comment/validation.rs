//! Comment submission validation.
//!
//! Pure checks applied to visitor input before anything is persisted.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// `local-part@domain.tld`, with no whitespace and a single `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Visitor-supplied comment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentField {
    /// The content item being commented on.
    Slug,
    Author,
    Email,
    Content,
}

impl CommentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentField::Slug => "slug",
            CommentField::Author => "author",
            CommentField::Email => "email",
            CommentField::Content => "content",
        }
    }
}

impl fmt::Display for CommentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a comment submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentValidationError {
    #[error("Field '{0}' cannot be empty")]
    MissingField(CommentField),

    #[error("Email address has an invalid format")]
    InvalidEmail,
}

impl CommentValidationError {
    /// Message safe to show to the person who submitted the comment.
    pub fn user_message(&self) -> &'static str {
        match self {
            CommentValidationError::MissingField(_) => "Please fill in all fields.",
            CommentValidationError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

/// Trimmed, validated submission fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    pub author: String,
    pub email: String,
    pub content: String,
}

/// Validates a comment submission.
///
/// Fields are trimmed first. Missing fields are reported in the order
/// author, email, content; the email format is only checked once every
/// field is present.
pub fn validate(author: &str, email: &str, content: &str) -> Result<ValidInput, CommentValidationError> {
    let author = author.trim();
    let email = email.trim();
    let content = content.trim();

    for (field, value) in [
        (CommentField::Author, author),
        (CommentField::Email, email),
        (CommentField::Content, content),
    ] {
        if value.is_empty() {
            return Err(CommentValidationError::MissingField(field));
        }
    }

    if !is_valid_email(email) {
        return Err(CommentValidationError::InvalidEmail);
    }

    Ok(ValidInput {
        author: author.to_string(),
        email: email.to_string(),
        content: content.to_string(),
    })
}

/// Returns true if `email` looks like `local-part@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
