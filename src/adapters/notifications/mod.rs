//! Notification channel adapters.
//!
//! - `TwilioSmsChannel` - SMS through Twilio's REST API
//! - `WebhookChannel` - JSON POST to a configured URL
//!
//! `channels_from_config` builds only the channels whose settings are
//! complete; everything else is reported as disabled by the dispatcher.

mod twilio_sms_channel;
mod webhook_channel;

#[cfg(test)]
pub(crate) mod test_support;

pub use twilio_sms_channel::TwilioSmsChannel;
pub use webhook_channel::{WebhookBody, WebhookChannel};

use reqwest::{Client, Response};
use std::sync::Arc;

use crate::config::NotificationsConfig;
use crate::ports::{ChannelError, NotificationChannel};

/// Longest slice of a rejection body kept in the error.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Build every fully configured channel, sharing one HTTP client.
pub fn channels_from_config(config: &NotificationsConfig) -> Vec<Arc<dyn NotificationChannel>> {
    let client = Client::new();
    let mut channels: Vec<Arc<dyn NotificationChannel>> = Vec::new();

    if let Some(sms) = config.sms() {
        channels.push(Arc::new(TwilioSmsChannel::new(sms, client.clone())));
    }
    if let Some(url) = config.webhook_url() {
        channels.push(Arc::new(WebhookChannel::new(url, client)));
    }
    channels
}

pub(crate) fn request_error(e: reqwest::Error) -> ChannelError {
    if e.is_builder() {
        ChannelError::invalid_configuration(e.to_string())
    } else if e.is_connect() {
        ChannelError::network(format!("Connection failed: {}", e))
    } else {
        ChannelError::network(e.to_string())
    }
}

pub(crate) async fn rejection(response: Response) -> ChannelError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ChannelError::rejected(status, body.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::ChannelKind;
    use secrecy::SecretString;

    fn full_config() -> NotificationsConfig {
        NotificationsConfig {
            twilio_account_sid: Some("AC123".to_string()),
            twilio_auth_token: Some(SecretString::new("token".to_string())),
            twilio_phone_number: Some("+15550001111".to_string()),
            admin_phone_number: Some("+15550002222".to_string()),
            comment_webhook_url: Some("https://hooks.example.com/c".to_string()),
            ..NotificationsConfig::default()
        }
    }

    #[test]
    fn builds_both_channels_when_configured() {
        let kinds: Vec<_> = channels_from_config(&full_config())
            .iter()
            .map(|c| c.kind())
            .collect();
        assert_eq!(kinds, vec![ChannelKind::Sms, ChannelKind::Webhook]);
    }

    #[test]
    fn builds_nothing_by_default() {
        assert!(channels_from_config(&NotificationsConfig::default()).is_empty());
    }

    #[test]
    fn blank_value_leaves_sms_out() {
        let config = NotificationsConfig {
            admin_phone_number: Some("   ".to_string()),
            ..full_config()
        };
        let kinds: Vec<_> = channels_from_config(&config).iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![ChannelKind::Webhook]);
    }
}
