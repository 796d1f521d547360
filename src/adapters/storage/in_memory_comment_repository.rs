//! In-Memory Comment Repository
//!
//! Keeps comments in insertion order inside the process.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::comment::{Comment, ValidInput};
use crate::domain::foundation::CommentId;
use crate::ports::{CommentRepository, StorageError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Approve a stored comment, standing in for external moderation.
    ///
    /// Returns false if no comment has this id.
    pub async fn approve(&self, id: &CommentId) -> bool {
        let mut comments = self.comments.write().await;
        match comments.iter_mut().find(|c| c.id() == id) {
            Some(comment) => {
                comment.approve();
                true
            }
            None => false,
        }
    }

    /// Every stored comment, approved or not.
    pub async fn all(&self) -> Vec<Comment> {
        self.comments.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list_approved(&self, content_identifier: &str) -> Result<Vec<Comment>, StorageError> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| c.is_visible_on(content_identifier))
            .cloned()
            .collect())
    }

    async fn create(&self, content_identifier: &str, input: ValidInput) -> Result<Comment, StorageError> {
        let comment = Comment::new(content_identifier, input);
        self.comments.write().await.push(comment.clone());
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn input(author: &str, content: &str) -> ValidInput {
        ValidInput {
            author: author.to_string(),
            email: "reader@example.com".to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn created_comments_are_hidden_until_approved() {
        let repo = InMemoryCommentRepository::new();
        let comment = repo.create("hello", input("Jo", "Nice post!")).await.unwrap();

        assert!(!comment.is_approved());
        assert!(repo.list_approved("hello").await.unwrap().is_empty());

        assert!(repo.approve(comment.id()).await);
        let listed = repo.list_approved("hello").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].author(), "Jo");
        assert_eq!(listed[0].content(), "Nice post!");
    }

    #[tokio::test]
    async fn listing_is_scoped_to_slug_and_stable() {
        let repo = InMemoryCommentRepository::new();
        for (slug, author) in [("a", "one"), ("b", "two"), ("a", "three")] {
            let c = repo.create(slug, input(author, "hi")).await.unwrap();
            repo.approve(c.id()).await;
        }

        let first = repo.list_approved("a").await.unwrap();
        let second = repo.list_approved("a").await.unwrap();
        assert_eq!(first, second);
        let authors: Vec<&str> = first.iter().map(|c| c.author()).collect();
        assert_eq!(authors, vec!["one", "three"]);
    }

    #[tokio::test]
    async fn approve_unknown_id_is_false() {
        let repo = InMemoryCommentRepository::new();
        assert!(!repo.approve(&CommentId::new()).await);
    }

    #[tokio::test]
    async fn concurrent_creates_lose_nothing() {
        let repo = InMemoryCommentRepository::new();
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create("busy", input(&format!("reader-{i}"), "hi")).await
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(*handle.await.unwrap().unwrap().id());
        }
        assert_eq!(ids.len(), 50);
        assert_eq!(repo.len().await, 50);
    }
}
