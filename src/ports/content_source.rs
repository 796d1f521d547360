//! Content source port - where posts come from.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::{ContentItem, ContentPage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Content could not be read: {0}")]
    Io(String),
}

/// Read-only access to published content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All content items, newest first.
    async fn list(&self) -> Result<Vec<ContentItem>, ContentError>;

    /// One content item with its rendered body.
    ///
    /// Returns `None` for unknown or unsafe slugs.
    async fn get(&self, slug: &str) -> Result<Option<ContentPage>, ContentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_source_is_object_safe() {
        fn _accepts_dyn(_source: &dyn ContentSource) {}
    }
}
