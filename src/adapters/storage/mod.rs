//! Comment storage adapters.
//!
//! - `InMemoryCommentRepository` - process-local, for tests and development
//! - `FileCommentRepository` - JSON file on local disk

mod file_comment_repository;
mod in_memory_comment_repository;

pub use file_comment_repository::FileCommentRepository;
pub use in_memory_comment_repository::InMemoryCommentRepository;
