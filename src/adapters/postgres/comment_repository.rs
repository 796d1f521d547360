//! PostgreSQL implementation of CommentRepository.
//!
//! Comments live in the `comments` table created by the embedded
//! migrations. Approval is done directly in the database by moderators.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::domain::comment::{Comment, ValidInput};
use crate::domain::foundation::{CommentId, Timestamp};
use crate::ports::{CommentRepository, StorageError};

/// Open a connection pool using the storage settings.
pub async fn connect(config: &StorageConfig) -> Result<PgPool, StorageError> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.database_url)
        .await
        .map_err(|e| StorageError::database(format!("Failed to connect: {}", e)))
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| StorageError::database(format!("Migration failed: {}", e)))
}

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_approved(&self, content_identifier: &str) -> Result<Vec<Comment>, StorageError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT id, content_identifier, author, email, content, submitted_at, approved
            FROM comments
            WHERE content_identifier = $1 AND approved
            ORDER BY submitted_at ASC, id ASC
            "#,
        )
        .bind(content_identifier)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::database(format!("Failed to fetch comments: {}", e)))?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn create(&self, content_identifier: &str, input: ValidInput) -> Result<Comment, StorageError> {
        let comment = Comment::new(content_identifier, input);

        sqlx::query(
            r#"
            INSERT INTO comments (
                id, content_identifier, author, email, content, submitted_at, approved
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id().as_uuid())
        .bind(comment.content_identifier())
        .bind(comment.author())
        .bind(comment.email())
        .bind(comment.content())
        .bind(comment.submitted_at().as_datetime())
        .bind(comment.is_approved())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::database(format!("Failed to insert comment: {}", e)))?;

        Ok(comment)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    content_identifier: String,
    author: String,
    email: String,
    content: String,
    submitted_at: DateTime<Utc>,
    approved: bool,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment::reconstitute(
            CommentId::from_uuid(row.id),
            row.content_identifier,
            row.author,
            row.email,
            row.content,
            Timestamp::from_datetime(row.submitted_at),
            row.approved,
        )
    }
}
