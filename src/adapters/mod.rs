//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Comment stores (in-memory, JSON file)
//! - `postgres` - Comment store backed by PostgreSQL
//! - `content` - Markdown posts on disk
//! - `notifications` - Twilio SMS and JSON webhook channels
//! - `http` - Axum REST API

pub mod content;
pub mod http;
pub mod notifications;
pub mod postgres;
pub mod storage;

pub use content::FilesystemContentSource;
pub use notifications::{channels_from_config, TwilioSmsChannel, WebhookChannel};
pub use postgres::PostgresCommentRepository;
pub use storage::{FileCommentRepository, InMemoryCommentRepository};

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::{CommentRepository, StorageError};

/// Build the comment store selected by configuration.
///
/// For Postgres this connects and, when enabled, applies migrations.
pub async fn comment_repository_from_config(
    config: &StorageConfig,
) -> Result<Arc<dyn CommentRepository>, StorageError> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory comment store; comments are lost on restart");
            Ok(Arc::new(InMemoryCommentRepository::new()))
        }
        StorageBackend::File => {
            tracing::info!(path = %config.comments_file.display(), "Using file comment store");
            Ok(Arc::new(FileCommentRepository::new(&config.comments_file)))
        }
        StorageBackend::Postgres => {
            let pool = postgres::connect(config).await?;
            if config.run_migrations {
                postgres::run_migrations(&pool).await?;
            }
            tracing::info!("Using PostgreSQL comment store");
            Ok(Arc::new(PostgresCommentRepository::new(pool)))
        }
    }
}
