//! Twilio SMS channel.
//!
//! Sends the admin a short text through Twilio's Messages API:
//! `POST {base}/2010-04-01/Accounts/{sid}/Messages.json` with basic auth
//! and a form body of `From`, `To`, `Body`.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;

use super::{request_error, rejection};
use crate::config::SmsSettings;
use crate::domain::notification::{format_sms_message, ChannelKind, NotificationPayload};
use crate::ports::{ChannelError, NotificationChannel};

pub struct TwilioSmsChannel {
    settings: SmsSettings,
    client: Client,
}

impl TwilioSmsChannel {
    pub fn new(settings: SmsSettings, client: Client) -> Self {
        Self { settings, client }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.account_sid
        )
    }
}

#[async_trait]
impl NotificationChannel for TwilioSmsChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Sms
    }

    async fn send(&self, payload: &NotificationPayload) -> Result<(), ChannelError> {
        let body = format_sms_message(payload);
        let form = [
            ("From", self.settings.from_number.as_str()),
            ("To", self.settings.to_number.as_str()),
            ("Body", body.as_str()),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(
                &self.settings.account_sid,
                Some(self.settings.auth_token.expose_secret()),
            )
            .form(&form)
            .send()
            .await
            .map_err(request_error)?;

        if response.status().is_success() {
            tracing::debug!(to = %self.settings.to_number, "SMS accepted by Twilio");
            return Ok(());
        }
        Err(rejection(response).await)
    }
}
