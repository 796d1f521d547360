//! New-comment notification configuration
//!
//! Each channel is enabled only when every value it needs is present and
//! non-blank. Missing values are not an error: the channel stays inert.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for extra delivery attempts per channel.
pub const MAX_NOTIFICATION_RETRIES: u32 = 5;

/// Legacy environment variable names and the config keys they fill.
pub(super) const LEGACY_ENV_KEYS: [(&str, &str); 5] = [
    ("notifications.twilio_account_sid", "TWILIO_ACCOUNT_SID"),
    ("notifications.twilio_auth_token", "TWILIO_AUTH_TOKEN"),
    ("notifications.twilio_phone_number", "TWILIO_PHONE_NUMBER"),
    ("notifications.admin_phone_number", "ADMIN_PHONE_NUMBER"),
    ("notifications.comment_webhook_url", "COMMENT_WEBHOOK_URL"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// Twilio account SID
    pub twilio_account_sid: Option<String>,

    /// Twilio auth token
    pub twilio_auth_token: Option<SecretString>,

    /// Sending number (E.164, e.g. +15550001111)
    pub twilio_phone_number: Option<String>,

    /// Number that receives alerts
    pub admin_phone_number: Option<String>,

    /// Twilio API base URL
    #[serde(default = "default_twilio_base_url")]
    pub twilio_base_url: String,

    /// Webhook receiving JSON alerts
    pub comment_webhook_url: Option<String>,

    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts after a transient failure
    #[serde(default)]
    pub max_retries: u32,
}

/// Resolved SMS settings; only exists when all four values are set.
#[derive(Debug, Clone)]
pub struct SmsSettings {
    pub account_sid: String,
    pub auth_token: SecretString,
    pub from_number: String,
    pub to_number: String,
    pub base_url: String,
}

impl NotificationsConfig {
    /// SMS settings, or `None` if any required value is missing or blank.
    pub fn sms(&self) -> Option<SmsSettings> {
        let account_sid = non_blank(self.twilio_account_sid.as_deref())?;
        let auth_token = self
            .twilio_auth_token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty())?;
        let from_number = non_blank(self.twilio_phone_number.as_deref())?;
        let to_number = non_blank(self.admin_phone_number.as_deref())?;

        Some(SmsSettings {
            account_sid: account_sid.to_string(),
            auth_token: auth_token.clone(),
            from_number: from_number.to_string(),
            to_number: to_number.to_string(),
            base_url: self.twilio_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Webhook URL, or `None` if unset or blank.
    pub fn webhook_url(&self) -> Option<&str> {
        non_blank(self.comment_webhook_url.as_deref())
    }

    pub fn is_sms_enabled(&self) -> bool {
        self.sms().is_some()
    }

    pub fn is_webhook_enabled(&self) -> bool {
        self.webhook_url().is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidNotificationTimeout);
        }
        if self.max_retries > MAX_NOTIFICATION_RETRIES {
            return Err(ValidationError::TooManyNotificationRetries(
                MAX_NOTIFICATION_RETRIES,
            ));
        }
        Ok(())
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            twilio_account_sid: None,
            twilio_auth_token: None,
            twilio_phone_number: None,
            admin_phone_number: None,
            twilio_base_url: default_twilio_base_url(),
            comment_webhook_url: None,
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn default_twilio_base_url() -> String {
    "https://api.twilio.com".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}
