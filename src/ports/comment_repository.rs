//! Comment repository port.
//!
//! Defines the contract for persisting new comments and reading the
//! approved ones back. Approval itself happens outside this service, so
//! the port has no update or delete operations.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::comment::{Comment, ValidInput};

/// Persistence failures. Never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored comments could not be (de)serialized: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl StorageError {
    pub fn io(message: impl Into<String>) -> Self {
        StorageError::Io(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        StorageError::Serialization(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        StorageError::Database(message.into())
    }
}

/// Repository port for comments.
///
/// Implementations must ensure:
/// - `create` assigns a fresh id and stores the comment unapproved
/// - concurrent `create` calls never lose writes
/// - `list_approved` returns a stable order when nothing was written in between
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Approved comments for a content item.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the store cannot be read
    async fn list_approved(&self, content_identifier: &str) -> Result<Vec<Comment>, StorageError>;

    /// Persist a new, unapproved comment.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn create(&self, content_identifier: &str, input: ValidInput) -> Result<Comment, StorageError>;
}
