//! HTTP handlers for post, navigation and health endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::{HealthResponse, ListPostsParams, NavigationParams, PostListResponse, PostResponse};
use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::{GetPostQuery, ListPostsQuery};
use crate::domain::content::navigation;
use crate::domain::foundation::ErrorCode;
use crate::ports::ContentError;

/// GET /api/posts - Paginated post listing, newest first
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> Result<impl IntoResponse, ContentApiError> {
    let handler = state.list_posts_handler();
    let query = ListPostsQuery {
        page: params.page,
        per_page: params.per_page,
    };

    let page = handler.handle(query).await?;
    Ok(Json(PostListResponse::from(page)))
}

/// GET /api/posts/:slug - One post with rendered HTML
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ContentApiError> {
    let handler = state.get_post_handler();

    match handler.handle(GetPostQuery { slug }).await? {
        Some(page) => Ok(Json(PostResponse::from(page)).into_response()),
        None => Ok(ErrorResponse::new(ErrorCode::ContentNotFound, "Post not found")
            .into_response_with(StatusCode::NOT_FOUND)),
    }
}

/// GET /api/navigation?path= - Header links with the active one marked
pub async fn get_navigation(Query(params): Query<NavigationParams>) -> impl IntoResponse {
    let path = params.path.unwrap_or_else(|| "/".to_string());
    Json(navigation(&path))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// API error wrapper for content queries.
#[derive(Debug)]
pub struct ContentApiError(ContentError);

impl From<ContentError> for ContentApiError {
    fn from(err: ContentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ContentApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Content unavailable");
        ErrorResponse::new(ErrorCode::ContentUnavailable, "Content is temporarily unavailable.")
            .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
