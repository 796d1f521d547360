//! Axum router configuration for post, navigation and health endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_navigation, get_post, health, list_posts};
use crate::adapters::http::state::AppState;

/// Create the content router.
///
/// # Routes
/// - `GET /api/posts?page=&per_page=` - Paginated listing
/// - `GET /api/posts/:slug` - Single rendered post
/// - `GET /api/navigation?path=` - Header navigation model
/// - `GET /health` - Liveness probe
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(get_post))
        .route("/api/navigation", get(get_navigation))
        .route("/health", get(health))
}
