//! HTTP adapter for comment endpoints.
//!
//! - `POST /api/comments` - Submit a comment (stored unapproved)
//! - `GET /api/comments?slug=` - List approved comments for a post

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::comment_routes;
