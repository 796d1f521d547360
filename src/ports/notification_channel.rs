//! Notification channel port.
//!
//! A channel delivers one new-comment alert to one destination (an SMS
//! gateway, a webhook). Channels only exist when fully configured; the
//! dispatcher decides what to do with their failures.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::notification::{ChannelKind, NotificationPayload};

/// Delivery failure for a single channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid channel configuration: {0}")]
    InvalidConfiguration(String),
}

impl ChannelError {
    pub fn network(message: impl Into<String>) -> Self {
        ChannelError::Network(message.into())
    }

    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        ChannelError::Rejected {
            status,
            body: body.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ChannelError::InvalidConfiguration(message.into())
    }

    /// Whether another attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ChannelError::Network(_) | ChannelError::Timeout(_) => true,
            ChannelError::Rejected { status, .. } => *status == 429 || *status >= 500,
            ChannelError::InvalidConfiguration(_) => false,
        }
    }
}

#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn kind(&self) -> ChannelKind;

    /// Deliver one alert. A single attempt; timeouts and retries are the caller's concern.
    async fn send(&self, payload: &NotificationPayload) -> Result<(), ChannelError>;
}
