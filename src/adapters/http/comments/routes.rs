//! Axum router configuration for comment endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_comments, submit_comment};
use crate::adapters::http::state::AppState;

/// Create the comments router.
///
/// # Routes
/// - `GET /api/comments?slug=` - Approved comments for a post
/// - `POST /api/comments` - Submit a comment for moderation
pub fn comment_routes() -> Router<AppState> {
    Router::new().route("/api/comments", get(list_comments).post(submit_comment))
}
