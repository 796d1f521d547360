//! Comment pipeline error types.

use crate::domain::foundation::ErrorCode;
use crate::ports::StorageError;

use super::validation::CommentValidationError;

/// Errors that end a comment submission.
///
/// Notification failures are deliberately absent: they are contained by
/// the dispatcher and never reach the submitter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentError {
    #[error(transparent)]
    Validation(#[from] CommentValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CommentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CommentError::Validation(CommentValidationError::MissingField(_)) => {
                ErrorCode::MissingField
            }
            CommentError::Validation(CommentValidationError::InvalidEmail) => {
                ErrorCode::InvalidEmail
            }
            CommentError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Message returned to the submitter. Storage details are kept out of it.
    pub fn user_message(&self) -> &'static str {
        match self {
            CommentError::Validation(e) => e.user_message(),
            CommentError::Storage(_) => "Failed to submit comment. Please try again.",
        }
    }
}
