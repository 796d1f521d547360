//! ListApprovedCommentsHandler - Query handler for the public comment list.

use std::sync::Arc;

use crate::domain::comment::{Comment, CommentError, CommentField, CommentValidationError};
use crate::ports::CommentRepository;

/// Query for the approved comments on one content item.
#[derive(Debug, Clone)]
pub struct ListApprovedCommentsQuery {
    pub slug: String,
}

pub struct ListApprovedCommentsHandler {
    repository: Arc<dyn CommentRepository>,
}

impl ListApprovedCommentsHandler {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListApprovedCommentsQuery) -> Result<Vec<Comment>, CommentError> {
        let slug = query.slug.trim();
        if slug.is_empty() {
            return Err(CommentValidationError::MissingField(CommentField::Slug).into());
        }

        let comments = self.repository.list_approved(slug).await.map_err(|e| {
            tracing::error!(slug = %slug, error = %e, "Failed to load comments");
            e
        })?;

        // Adapters filter already; an unapproved comment must never leak.
        Ok(comments
            .into_iter()
            .filter(|c| c.is_visible_on(slug))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCommentRepository;
    use crate::domain::comment::ValidInput;
    use crate::domain::foundation::{CommentId, Timestamp};

    fn input(author: &str) -> ValidInput {
        ValidInput {
            author: author.to_string(),
            email: "a@b.com".to_string(),
            content: format!("Comment by {}", author),
        }
    }

    #[tokio::test]
    async fn returns_only_approved_comments_for_slug() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let approved = repo.create("hello", input("Ann")).await.unwrap();
        repo.create("hello", input("Bob")).await.unwrap();
        let elsewhere = repo.create("other", input("Cy")).await.unwrap();
        repo.approve(approved.id()).await;
        repo.approve(elsewhere.id()).await;

        let handler = ListApprovedCommentsHandler::new(repo);
        let comments = handler
            .handle(ListApprovedCommentsQuery {
                slug: "hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author(), "Ann");
    }

    #[tokio::test]
    async fn filters_unapproved_even_if_store_returns_them() {
        let leaked = Comment::reconstitute(
            CommentId::new(),
            "hello".to_string(),
            "Eve".to_string(),
            "e@x.com".to_string(),
            "spam".to_string(),
            Timestamp::now(),
            false,
        );

        struct LeakyRepository(Comment);

        #[async_trait::async_trait]
        impl CommentRepository for LeakyRepository {
            async fn list_approved(&self, _: &str) -> Result<Vec<Comment>, crate::ports::StorageError> {
                Ok(vec![self.0.clone()])
            }

            async fn create(&self, _: &str, _: ValidInput) -> Result<Comment, crate::ports::StorageError> {
                unreachable!()
            }
        }

        let handler = ListApprovedCommentsHandler::new(Arc::new(LeakyRepository(leaked)));
        let comments = handler
            .handle(ListApprovedCommentsQuery {
                slug: "hello".to_string(),
            })
            .await
            .unwrap();

        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn blank_slug_is_rejected() {
        let handler = ListApprovedCommentsHandler::new(Arc::new(InMemoryCommentRepository::new()));
        let err = handler
            .handle(ListApprovedCommentsQuery {
                slug: "  ".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CommentError::Validation(CommentValidationError::MissingField(CommentField::Slug))
        );
    }
}
