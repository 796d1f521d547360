//! Comment storage configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Which comment store backs the API
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local; contents are lost on restart
    Memory,
    /// JSON file on local disk
    #[default]
    File,
    /// PostgreSQL via sqlx
    Postgres,
}

/// Comment storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// JSON file used by the `file` backend
    #[serde(default = "default_comments_file")]
    pub comments_file: PathBuf,

    /// PostgreSQL connection URL, required by the `postgres` backend
    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Run embedded migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl StorageConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate storage configuration. Database settings are only checked
    /// when the `postgres` backend is selected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.backend {
            StorageBackend::Memory => Ok(()),
            StorageBackend::File => {
                if self.comments_file.as_os_str().is_empty() {
                    return Err(ValidationError::MissingRequired("STORAGE__COMMENTS_FILE"));
                }
                Ok(())
            }
            StorageBackend::Postgres => {
                if self.database_url.is_empty() {
                    return Err(ValidationError::MissingRequired("STORAGE__DATABASE_URL"));
                }
                if !self.database_url.starts_with("postgres://")
                    && !self.database_url.starts_with("postgresql://")
                {
                    return Err(ValidationError::InvalidDatabaseUrl);
                }
                if self.min_connections > self.max_connections {
                    return Err(ValidationError::InvalidPoolSize);
                }
                if self.max_connections > 100 {
                    return Err(ValidationError::PoolSizeTooLarge);
                }
                Ok(())
            }
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            comments_file: default_comments_file(),
            database_url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: default_run_migrations(),
        }
    }
}

fn default_comments_file() -> PathBuf {
    PathBuf::from("data/comments.json")
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    10
}

fn default_run_migrations() -> bool {
    true
}
