//! Generic JSON webhook channel.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use serde::Serialize;

use super::{rejection, request_error};
use crate::domain::notification::{ChannelKind, NotificationPayload};
use crate::ports::{ChannelError, NotificationChannel};

/// JSON body posted to the webhook.
#[derive(Debug, Serialize)]
pub struct WebhookBody<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub timestamp: String,
    pub slug: &'a str,
    pub author: &'a str,
    pub content: &'a str,
    #[serde(rename = "postTitle", skip_serializing_if = "Option::is_none")]
    pub post_title: Option<&'a str>,
}

impl<'a> WebhookBody<'a> {
    pub fn new(payload: &'a NotificationPayload) -> Self {
        Self {
            kind: "new_comment",
            timestamp: Utc::now().to_rfc3339(),
            slug: &payload.content_identifier,
            author: &payload.author,
            content: &payload.content,
            post_title: payload.content_title.as_deref(),
        }
    }
}

pub struct WebhookChannel {
    url: String,
    client: Client,
}

impl WebhookChannel {
    /// The URL is checked on each send so a malformed value fails that
    /// channel only, never startup.
    pub fn new(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl NotificationChannel for WebhookChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Webhook
    }

    async fn send(&self, payload: &NotificationPayload) -> Result<(), ChannelError> {
        let url = Url::parse(&self.url)
            .map_err(|e| ChannelError::invalid_configuration(format!("webhook URL: {}", e)))?;

        let response = self
            .client
            .post(url)
            .json(&WebhookBody::new(payload))
            .send()
            .await
            .map_err(request_error)?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(rejection(response).await)
    }
}
