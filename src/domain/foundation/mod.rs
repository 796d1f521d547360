//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier, time and error-code vocabulary used across
//! the content, comment and notification modules.

mod errors;
mod ids;
mod timestamp;

pub use errors::ErrorCode;
pub use ids::CommentId;
pub use timestamp::Timestamp;
