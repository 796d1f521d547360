//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresCommentRepository` - comments table, approval done in-database

mod comment_repository;

pub use comment_repository::{connect, run_migrations, PostgresCommentRepository};
