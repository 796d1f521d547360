//! File-backed Comment Repository
//!
//! Stores every comment in one JSON array file. Moderators approve a
//! comment by setting its `approved` flag in the file.
//!
//! Writes are serialized through an async mutex and committed by writing a
//! temporary file and renaming it over the original, so readers never see a
//! half-written file.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::comment::{Comment, ValidInput};
use crate::ports::{CommentRepository, StorageError};

pub struct FileCommentRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCommentRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read every stored comment. A missing file is an empty store.
    async fn load(&self) -> Result<Vec<Comment>, StorageError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            StorageError::serialization(format!("{} is not a comment list: {}", self.path.display(), e))
        })
    }

    async fn store(&self, comments: &[Comment]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::io(format!("Failed to create directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(comments)
            .map_err(|e| StorageError::serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| StorageError::io(format!("Failed to write temporary file: {}", e)))?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::io(format!("Failed to rename file: {}", e)))
    }
}

#[async_trait]
impl CommentRepository for FileCommentRepository {
    async fn list_approved(&self, content_identifier: &str) -> Result<Vec<Comment>, StorageError> {
        let comments = self.load().await?;
        Ok(comments
            .into_iter()
            .filter(|c| c.is_visible_on(content_identifier))
            .collect())
    }

    async fn create(&self, content_identifier: &str, input: ValidInput) -> Result<Comment, StorageError> {
        let _guard = self.write_lock.lock().await;

        // A corrupt file must surface as an error rather than be overwritten.
        let mut comments = self.load().await?;
        let comment = Comment::new(content_identifier, input);
        comments.push(comment.clone());
        self.store(&comments).await?;

        tracing::debug!(
            comment_id = %comment.id(),
            path = %self.path.display(),
            total = comments.len(),
            "Comment appended to file store"
        );
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn input(author: &str) -> ValidInput {
        ValidInput {
            author: author.to_string(),
            email: "reader@example.com".to_string(),
            content: "Great read".to_string(),
        }
    }

    /// Flip `approved` for every comment in the file, as a moderator would.
    async fn approve_all(path: &Path) {
        let raw = fs::read_to_string(path).await.unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        for comment in value.as_array_mut().unwrap() {
            comment["approved"] = serde_json::Value::Bool(true);
        }
        fs::write(path, value.to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let repo = FileCommentRepository::new(dir.path().join("comments.json"));
        assert!(repo.list_approved("hello").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_persists_unapproved_and_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/data/comments.json");
        let repo = FileCommentRepository::new(&path);

        let comment = repo.create("hello", input("Jo")).await.unwrap();
        assert!(path.exists());
        assert!(!comment.is_approved());
        assert!(repo.list_approved("hello").await.unwrap().is_empty());

        let raw = fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"approved\": false"));
        assert!(!dir.path().join("nested/data/comments.json.tmp").exists());
    }

    #[tokio::test]
    async fn moderated_comments_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comments.json");
        let repo = FileCommentRepository::new(&path);

        repo.create("hello", input("Jo")).await.unwrap();
        repo.create("other", input("Sam")).await.unwrap();
        approve_all(&path).await;

        let listed = repo.list_approved("hello").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].author(), "Jo");
        assert_eq!(listed[0].content(), "Great read");
        assert_eq!(listed, repo.list_approved("hello").await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error_and_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comments.json");
        fs::write(&path, "{not json").await.unwrap();
        let repo = FileCommentRepository::new(&path);

        assert!(matches!(
            repo.list_approved("hello").await,
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            repo.create("hello", input("Jo")).await,
            Err(StorageError::Serialization(_))
        ));
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "{not json");
    }

    #[tokio::test]
    async fn unwritable_location_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        // A regular file where a directory is needed.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").await.unwrap();
        let repo = FileCommentRepository::new(blocker.join("comments.json"));

        assert!(matches!(
            repo.create("hello", input("Jo")).await,
            Err(StorageError::Io(_))
        ));
    }

    #[tokio::test]
    async fn concurrent_creates_lose_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comments.json");
        let repo = Arc::new(FileCommentRepository::new(&path));

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create("busy", input(&format!("r{i}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        approve_all(&path).await;
        assert_eq!(repo.list_approved("busy").await.unwrap().len(), 20);
    }
}
