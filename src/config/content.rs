//! Content configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Upper bound for `per_page`, whether configured or requested.
pub const MAX_POSTS_PER_PAGE: u32 = 50;

/// Where posts live and how they are listed
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Directory holding `.md`/`.mdx` post files
    #[serde(default = "default_posts_dir")]
    pub posts_dir: PathBuf,

    /// Default page size for post listings
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: u32,
}

impl ContentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.posts_per_page == 0 || self.posts_per_page > MAX_POSTS_PER_PAGE {
            return Err(ValidationError::InvalidPostsPerPage(MAX_POSTS_PER_PAGE));
        }
        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            posts_per_page: default_posts_per_page(),
        }
    }
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from("content/posts")
}

fn default_posts_per_page() -> u32 {
    5
}
