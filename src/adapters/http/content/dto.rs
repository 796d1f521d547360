//! HTTP DTOs for post and navigation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::content::{ContentItem, ContentPage, Page};

/// Query of `GET /api/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Query of `GET /api/navigation`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavigationParams {
    pub path: Option<String>,
}

/// Listing metadata for one post.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummaryResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// RFC 3339, absent when the post is undated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

impl From<ContentItem> for PostSummaryResponse {
    fn from(item: ContentItem) -> Self {
        Self {
            slug: item.slug,
            title: item.title,
            description: item.description,
            published_date: item.published_date.map(|d| d.to_rfc3339()),
        }
    }
}

/// One page of the post listing.
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummaryResponse>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_more: bool,
}

impl From<Page<ContentItem>> for PostListResponse {
    fn from(page: Page<ContentItem>) -> Self {
        Self {
            posts: page.items.into_iter().map(PostSummaryResponse::from).collect(),
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
            has_more: page.has_more,
        }
    }
}

/// A single post with its rendered body.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    #[serde(flatten)]
    pub summary: PostSummaryResponse,
    pub html: String,
}

impl From<ContentPage> for PostResponse {
    fn from(page: ContentPage) -> Self {
        Self {
            summary: PostSummaryResponse::from(page.item),
            html: page.html,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
