//! NotificationDispatcher - fans a new-comment alert out to every channel.
//!
//! Channels run concurrently and in isolation. Each attempt is bounded by
//! the configured timeout; transient failures may be retried a bounded
//! number of times. Nothing here ever returns an error: every outcome ends
//! up in the `DispatchReport`.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

use crate::config::NotificationsConfig;
use crate::domain::notification::{ChannelKind, ChannelOutcome, DispatchReport, NotificationPayload};
use crate::ports::{ChannelError, NotificationChannel};

/// Pause between attempts on the same channel.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(250);

pub struct NotificationDispatcher {
    channels: Vec<Arc<dyn NotificationChannel>>,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
}

impl NotificationDispatcher {
    pub fn new(channels: Vec<Arc<dyn NotificationChannel>>, timeout: Duration) -> Self {
        Self {
            channels,
            timeout,
            max_retries: 0,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }

    /// Dispatcher with timeout and retry policy taken from configuration.
    pub fn from_config(
        config: &NotificationsConfig,
        channels: Vec<Arc<dyn NotificationChannel>>,
    ) -> Self {
        Self::new(channels, config.timeout()).with_retries(config.max_retries)
    }

    pub fn with_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Kinds that have a configured channel.
    pub fn enabled_channels(&self) -> Vec<ChannelKind> {
        self.channels.iter().map(|c| c.kind()).collect()
    }

    /// Attempt delivery on every configured channel.
    ///
    /// The report holds one entry per channel kind; kinds without a
    /// configured channel are `Disabled`.
    pub async fn dispatch(&self, payload: &NotificationPayload) -> DispatchReport {
        let attempts = self
            .channels
            .iter()
            .map(|channel| self.deliver(channel.as_ref(), payload));
        let outcomes = join_all(attempts).await;

        let mut report = DispatchReport::default();
        for kind in ChannelKind::ALL {
            match outcomes.iter().find(|(k, _)| *k == kind) {
                Some((_, outcome)) => report.record(kind, outcome.clone()),
                None => {
                    tracing::debug!(channel = %kind, "Notification channel disabled");
                    report.record(kind, ChannelOutcome::Disabled);
                }
            }
        }
        report
    }

    async fn deliver(
        &self,
        channel: &dyn NotificationChannel,
        payload: &NotificationPayload,
    ) -> (ChannelKind, ChannelOutcome) {
        let kind = channel.kind();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let result = match tokio::time::timeout(self.timeout, channel.send(payload)).await {
                Ok(result) => result,
                Err(_) => Err(ChannelError::Timeout(self.timeout)),
            };

            match result {
                Ok(()) => {
                    tracing::info!(
                        channel = %kind,
                        slug = %payload.content_identifier,
                        attempt,
                        "Notification sent"
                    );
                    return (kind, ChannelOutcome::Sent);
                }
                Err(e) if e.is_retryable() && attempt <= self.max_retries => {
                    tracing::debug!(channel = %kind, attempt, error = %e, "Retrying notification");
                    tokio::time::sleep(self.retry_backoff).await;
                }
                Err(e) => {
                    tracing::warn!(
                        channel = %kind,
                        slug = %payload.content_identifier,
                        attempt,
                        error = %e,
                        "Notification failed"
                    );
                    return (kind, ChannelOutcome::failed(e.to_string()));
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Channel replaying scripted results, recording every payload it sees.
    pub(crate) struct MockChannel {
        kind: ChannelKind,
        script: Mutex<VecDeque<Result<(), ChannelError>>>,
        delay: Duration,
        sent: Mutex<Vec<NotificationPayload>>,
    }

    impl MockChannel {
        pub(crate) fn succeeding(kind: ChannelKind) -> Self {
            Self::scripted(kind, vec![])
        }

        pub(crate) fn failing(kind: ChannelKind, error: ChannelError) -> Self {
            Self::scripted(kind, vec![Err(error); 10])
        }

        /// Results are used in order; once exhausted every send succeeds.
        pub(crate) fn scripted(kind: ChannelKind, script: Vec<Result<(), ChannelError>>) -> Self {
            Self {
                kind,
                script: Mutex::new(script.into()),
                delay: Duration::ZERO,
                sent: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn hanging(kind: ChannelKind) -> Self {
            Self {
                delay: Duration::from_secs(60),
                ..Self::succeeding(kind)
            }
        }

        pub(crate) fn attempts(&self) -> usize {
            self.sent.lock().unwrap().len()
        }

        pub(crate) fn sent(&self) -> Vec<NotificationPayload> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NotificationChannel for MockChannel {
        fn kind(&self) -> ChannelKind {
            self.kind
        }

        async fn send(&self, payload: &NotificationPayload) -> Result<(), ChannelError> {
            self.sent.lock().unwrap().push(payload.clone());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.script.lock().unwrap().pop_front().unwrap_or(Ok(()))
        }
    }

    fn payload() -> NotificationPayload {
        NotificationPayload {
            content_identifier: "hello-world".to_string(),
            author: "Jo".to_string(),
            content: "Nice post!".to_string(),
            content_title: None,
        }
    }

    fn dispatcher(channels: Vec<Arc<dyn NotificationChannel>>) -> NotificationDispatcher {
        NotificationDispatcher::new(channels, Duration::from_millis(200))
            .with_retry_backoff(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn no_channels_reports_all_disabled() {
        let report = dispatcher(vec![]).dispatch(&payload()).await;

        assert_eq!(report.channels.len(), 2);
        assert!(report.all_disabled());
    }

    #[tokio::test]
    async fn configured_channels_are_sent() {
        let sms = Arc::new(MockChannel::succeeding(ChannelKind::Sms));
        let webhook = Arc::new(MockChannel::succeeding(ChannelKind::Webhook));

        let report = dispatcher(vec![sms.clone(), webhook.clone()])
            .dispatch(&payload())
            .await;

        assert_eq!(report.sent_count(), 2);
        assert_eq!(sms.sent()[0], payload());
        assert_eq!(webhook.attempts(), 1);
    }

    #[tokio::test]
    async fn one_failure_does_not_affect_the_other_channel() {
        let sms = Arc::new(MockChannel::failing(
            ChannelKind::Sms,
            ChannelError::rejected(400, "bad number"),
        ));
        let webhook = Arc::new(MockChannel::succeeding(ChannelKind::Webhook));

        let report = dispatcher(vec![sms, webhook]).dispatch(&payload()).await;

        assert!(report.outcome(ChannelKind::Sms).unwrap().is_failed());
        assert!(report.outcome(ChannelKind::Webhook).unwrap().is_sent());
    }

    #[tokio::test]
    async fn only_sms_configured_leaves_webhook_disabled() {
        let sms = Arc::new(MockChannel::succeeding(ChannelKind::Sms));

        let report = dispatcher(vec![sms]).dispatch(&payload()).await;

        assert_eq!(
            report.outcome(ChannelKind::Webhook),
            Some(&ChannelOutcome::Disabled)
        );
    }

    #[tokio::test]
    async fn hanging_channel_times_out() {
        let sms = Arc::new(MockChannel::hanging(ChannelKind::Sms));
        let webhook = Arc::new(MockChannel::succeeding(ChannelKind::Webhook));

        let report = dispatcher(vec![sms, webhook]).dispatch(&payload()).await;

        match report.outcome(ChannelKind::Sms).unwrap() {
            ChannelOutcome::Failed { reason } => assert!(reason.contains("Timed out")),
            other => panic!("expected timeout failure, got {:?}", other),
        }
        assert!(report.outcome(ChannelKind::Webhook).unwrap().is_sent());
    }

    #[tokio::test]
    async fn transient_failure_is_retried() {
        let webhook = Arc::new(MockChannel::scripted(
            ChannelKind::Webhook,
            vec![Err(ChannelError::rejected(503, "busy"))],
        ));

        let report = dispatcher(vec![webhook.clone()])
            .with_retries(2)
            .dispatch(&payload())
            .await;

        assert!(report.outcome(ChannelKind::Webhook).unwrap().is_sent());
        assert_eq!(webhook.attempts(), 2);
    }

    #[tokio::test]
    async fn retries_are_bounded() {
        let webhook = Arc::new(MockChannel::failing(
            ChannelKind::Webhook,
            ChannelError::network("connection reset"),
        ));

        let report = dispatcher(vec![webhook.clone()])
            .with_retries(2)
            .dispatch(&payload())
            .await;

        assert!(report.outcome(ChannelKind::Webhook).unwrap().is_failed());
        assert_eq!(webhook.attempts(), 3);
    }

    #[tokio::test]
    async fn permanent_failure_is_not_retried() {
        let sms = Arc::new(MockChannel::failing(
            ChannelKind::Sms,
            ChannelError::rejected(401, "bad credentials"),
        ));

        dispatcher(vec![sms.clone()])
            .with_retries(3)
            .dispatch(&payload())
            .await;

        assert_eq!(sms.attempts(), 1);
    }

    #[test]
    fn from_config_reads_retry_policy() {
        let config = NotificationsConfig {
            max_retries: 2,
            timeout_secs: 7,
            ..NotificationsConfig::default()
        };
        let dispatcher = NotificationDispatcher::from_config(&config, vec![]);
        assert_eq!(dispatcher.max_retries, 2);
        assert_eq!(dispatcher.timeout, Duration::from_secs(7));
        assert!(dispatcher.enabled_channels().is_empty());
    }
}
