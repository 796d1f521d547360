//! HTTP handlers for comment endpoints.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::{CommentResponse, ListCommentsParams, SubmitCommentRequest, SubmitCommentResponse};
use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::{ListApprovedCommentsQuery, SubmitCommentCommand};
use crate::domain::comment::CommentError;

/// POST /api/comments - Submit a comment for moderation
///
/// Succeeds as soon as the comment is stored. Notification runs
/// separately and never changes the response.
pub async fn submit_comment(
    State(state): State<AppState>,
    Json(request): Json<SubmitCommentRequest>,
) -> Response {
    let handler = state.submit_comment_handler();
    let cmd = SubmitCommentCommand {
        slug: request.slug,
        author: request.author,
        email: request.email,
        content: request.content,
    };

    match handler.handle(cmd).await {
        Ok(_) => (StatusCode::CREATED, Json(SubmitCommentResponse::accepted())).into_response(),
        Err(e) => {
            let status = status_for(&e);
            (status, Json(SubmitCommentResponse::rejected(e.user_message()))).into_response()
        }
    }
}

/// GET /api/comments?slug= - Approved comments for a post
pub async fn list_comments(
    State(state): State<AppState>,
    Query(params): Query<ListCommentsParams>,
) -> Result<impl IntoResponse, CommentApiError> {
    let handler = state.list_comments_handler();
    let query = ListApprovedCommentsQuery {
        slug: params.slug.unwrap_or_default(),
    };

    let comments = handler.handle(query).await?;
    let response: Vec<CommentResponse> = comments.iter().map(CommentResponse::from).collect();
    Ok(Json(response))
}

fn status_for(error: &CommentError) -> StatusCode {
    match error {
        CommentError::Validation(_) => StatusCode::BAD_REQUEST,
        CommentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// API error wrapper for comment queries.
#[derive(Debug)]
pub struct CommentApiError(CommentError);

impl From<CommentError> for CommentApiError {
    fn from(err: CommentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CommentApiError {
    fn into_response(self) -> Response {
        let message = match &self.0 {
            CommentError::Validation(_) => "Missing required query parameter: slug",
            CommentError::Storage(_) => "Failed to load comments.",
        };
        ErrorResponse::new(self.0.code(), message).into_response_with(status_for(&self.0))
    }
}
