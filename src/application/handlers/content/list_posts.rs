//! ListPostsHandler - Query handler for the paginated post listing.

use std::sync::Arc;

use crate::config::MAX_POSTS_PER_PAGE;
use crate::domain::content::{paginate, ContentItem, Page};
use crate::ports::{ContentError, ContentSource};

/// Query for one page of posts. Missing values fall back to page 1 and
/// the configured page size.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct ListPostsHandler {
    source: Arc<dyn ContentSource>,
    default_per_page: u32,
}

impl ListPostsHandler {
    pub fn new(source: Arc<dyn ContentSource>, default_per_page: u32) -> Self {
        Self {
            source,
            default_per_page,
        }
    }

    pub async fn handle(&self, query: ListPostsQuery) -> Result<Page<ContentItem>, ContentError> {
        let per_page = query
            .per_page
            .unwrap_or(self.default_per_page)
            .clamp(1, MAX_POSTS_PER_PAGE);
        let page = query.page.unwrap_or(1);

        let items = self.source.list().await?;
        Ok(paginate(items, page, per_page))
    }
}
