//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CommentRepository` - comment persistence (file, Postgres, in-memory)
//! - `ContentSource` - published posts (filesystem)
//! - `NotificationChannel` - outbound new-comment alerts (SMS, webhook)

mod comment_repository;
mod content_source;
mod notification_channel;

pub use comment_repository::{CommentRepository, StorageError};
pub use content_source::{ContentError, ContentSource};
pub use notification_channel::{ChannelError, NotificationChannel};
