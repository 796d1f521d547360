//! GetPostHandler - Query handler for a single rendered post.

use std::sync::Arc;

use crate::domain::content::ContentPage;
use crate::ports::{ContentError, ContentSource};

#[derive(Debug, Clone)]
pub struct GetPostQuery {
    pub slug: String,
}

pub struct GetPostHandler {
    source: Arc<dyn ContentSource>,
}

impl GetPostHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Returns `None` when no post has the slug.
    pub async fn handle(&self, query: GetPostQuery) -> Result<Option<ContentPage>, ContentError> {
        self.source.get(query.slug.trim()).await
    }
}
